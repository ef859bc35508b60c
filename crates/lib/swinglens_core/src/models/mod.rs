//! Domain models.
//!
//! Rust structs exist for the entities the implemented flows touch; the
//! media pipeline tables (videos, frames, feedback, comparisons, progress
//! snapshots) are schema-only until their operations land.

pub mod academy;
pub mod coach;
pub mod player;

pub use academy::Academy;
pub use coach::Coach;
pub use player::Player;
