//! Academy record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A golf academy grouping coaches and players.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Academy {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}
