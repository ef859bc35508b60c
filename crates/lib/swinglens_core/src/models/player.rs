//! Player account record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// End-user account, unique by phone number. Auto-created on first
/// successful OTP verification; serializes directly as the API record.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub academy_id: Option<Uuid>,
    pub coach_id: Option<Uuid>,
    pub name: String,
    pub phone: String,
    pub handicap: Option<Decimal>,
    pub skill_level: String,
    pub dominant_hand: String,
    pub created_at: DateTime<Utc>,
}
