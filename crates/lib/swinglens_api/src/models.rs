//! API request and response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use swinglens_core::models::{Coach, Player};

#[derive(Debug, Deserialize)]
pub struct OtpSendRequest {
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct OtpSendResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct OtpVerifyRequest {
    pub phone: String,
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerOtpVerifyResponse {
    pub token: String,
    pub player: Player,
}

#[derive(Debug, Deserialize)]
pub struct CoachLoginRequest {
    pub email: String,
    pub password: String,
}

/// Coach wire shape — everything on the record except the password hash.
#[derive(Debug, Serialize)]
pub struct CoachResponse {
    pub id: Uuid,
    pub academy_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Coach> for CoachResponse {
    fn from(coach: Coach) -> Self {
        Self {
            id: coach.id,
            academy_id: coach.academy_id,
            name: coach.name,
            email: coach.email,
            phone: coach.phone,
            is_active: coach.is_active,
            created_at: coach.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CoachLoginResponse {
    pub token: String,
    pub coach: CoachResponse,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub db_connected: bool,
}
