//! Authentication logic.
//!
//! Provides password hashing, token issuance and verification, one-time
//! code generation and storage, and the account queries shared by the API
//! layer and the seed tooling.

pub mod jwt;
pub mod otp;
pub mod otp_store;
pub mod password;
pub mod queries;

use thiserror::Error;

/// Role claim carried by player tokens.
pub const ROLE_PLAYER: &str = "player";

/// Role claim carried by coach tokens.
pub const ROLE_COACH: &str = "coach";

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid token payload")]
    InvalidTokenPayload,

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
