//! One-time code generation.
//!
//! The generation strategy is chosen once at startup and injected into the
//! request flows, so request logic never inspects the environment itself.

use std::time::Duration;

use rand::{Rng, rng};

/// One-time codes live for five minutes; a resend overwrites the previous
/// code and resets this window.
pub const OTP_TTL: Duration = Duration::from_secs(300);

/// Number of digits in a one-time code.
pub const OTP_LENGTH: usize = 6;

/// Well-known code produced by the development generator.
pub const DEV_OTP: &str = "123456";

/// Strategy for producing one-time codes.
#[derive(Debug, Clone)]
pub enum CodeGenerator {
    /// Uniformly random digits.
    Random,
    /// Always the same code. This skips real SMS delivery and must only be
    /// selected for a development environment; the selection happens in the
    /// composition root, never per request.
    Fixed(String),
}

impl CodeGenerator {
    /// The fixed-code generator used by development environments.
    pub fn fixed_dev() -> Self {
        CodeGenerator::Fixed(DEV_OTP.to_string())
    }

    /// Produce a one-time code.
    pub fn generate(&self) -> String {
        match self {
            CodeGenerator::Random => {
                let mut rng = rng();
                (0..OTP_LENGTH)
                    .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
                    .collect()
            }
            CodeGenerator::Fixed(code) => code.clone(),
        }
    }
}
