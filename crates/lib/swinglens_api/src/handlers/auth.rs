//! Authentication request handlers.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{
    CoachLoginRequest, CoachLoginResponse, OtpSendRequest, OtpSendResponse, OtpVerifyRequest,
    PlayerOtpVerifyResponse,
};
use crate::services::auth;

const PHONE_MIN_LEN: usize = 10;
const PHONE_MAX_LEN: usize = 20;
const OTP_LEN: usize = 6;

fn validate_phone(phone: &str) -> Result<(), AppError> {
    if phone.len() < PHONE_MIN_LEN || phone.len() > PHONE_MAX_LEN {
        return Err(AppError::Validation(format!(
            "phone must be {PHONE_MIN_LEN}-{PHONE_MAX_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_otp(otp: &str) -> Result<(), AppError> {
    if otp.len() != OTP_LEN {
        return Err(AppError::Validation(format!(
            "otp must be {OTP_LEN} characters"
        )));
    }
    Ok(())
}

/// `POST /api/v1/auth/player/otp/send` — issue a one-time code for a phone
/// number.
pub async fn send_otp_handler(
    State(state): State<AppState>,
    Json(body): Json<OtpSendRequest>,
) -> AppResult<Json<OtpSendResponse>> {
    validate_phone(&body.phone)?;
    let resp = auth::send_otp(&state, &body.phone).await?;
    Ok(Json(resp))
}

/// `POST /api/v1/auth/player/otp/verify` — verify a one-time code, returning
/// a token and the (possibly auto-created) player.
pub async fn verify_otp_handler(
    State(state): State<AppState>,
    Json(body): Json<OtpVerifyRequest>,
) -> AppResult<Json<PlayerOtpVerifyResponse>> {
    validate_phone(&body.phone)?;
    validate_otp(&body.otp)?;
    let resp = auth::verify_otp(&state, &body.phone, &body.otp).await?;
    Ok(Json(resp))
}

/// `POST /api/v1/auth/coach/login` — authenticate a coach with email and
/// password.
pub async fn coach_login_handler(
    State(state): State<AppState>,
    Json(body): Json<CoachLoginRequest>,
) -> AppResult<Json<CoachLoginResponse>> {
    let resp = auth::coach_login(&state, &body.email, &body.password).await?;
    Ok(Json(resp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_length_bounds() {
        assert!(validate_phone("+919876543210").is_ok());
        assert!(validate_phone("0123456789").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("123456789").is_err());
        assert!(validate_phone("+01234567890123456789").is_err());
    }

    #[test]
    fn otp_must_be_six_characters() {
        assert!(validate_otp("123456").is_ok());
        assert!(validate_otp("12345").is_err());
        assert!(validate_otp("1234567").is_err());
    }
}
