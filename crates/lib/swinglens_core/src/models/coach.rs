//! Coach account record.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Staff account, unique by email. Carries the password hash, so it is
/// never serialized directly; the API layer maps it to a wire shape.
#[derive(Debug, Clone, FromRow)]
pub struct Coach {
    pub id: Uuid,
    pub academy_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
