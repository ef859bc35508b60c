//! Authentication flows — OTP send/verify and coach login.

use tracing::info;

use swinglens_core::auth::otp::OTP_TTL;
use swinglens_core::auth::otp_store::OtpStore;
use swinglens_core::auth::{ROLE_COACH, ROLE_PLAYER, jwt, password, queries};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{CoachLoginResponse, OtpSendResponse, PlayerOtpVerifyResponse};

/// Generate a one-time code for `phone` and store it, overwriting any prior
/// code and resetting its TTL.
///
/// Delivery is a collaborator concern; this flow only guarantees the code is
/// on record.
pub async fn send_otp(state: &AppState, phone: &str) -> AppResult<OtpSendResponse> {
    let code = state.code_generator.generate();
    state.otp_store.put(phone, &code, OTP_TTL).await?;
    // TODO: deliver the code through the SMS provider (MSG91).
    info!("one-time code issued");
    Ok(OtpSendResponse { success: true })
}

/// Verify a one-time code and return a token plus the player record,
/// auto-creating the player on first verification.
///
/// Failure modes in order: no code on record, then code mismatch (which
/// leaves the stored code in place for retry), then losing the consume race
/// to a concurrent verification.
pub async fn verify_otp(
    state: &AppState,
    phone: &str,
    otp: &str,
) -> AppResult<PlayerOtpVerifyResponse> {
    let stored = state.otp_store.peek(phone).await?;
    let Some(stored) = stored else {
        return Err(AppError::AuthenticationFailed(
            "OTP expired or not requested".into(),
        ));
    };

    if stored != otp {
        return Err(AppError::AuthenticationFailed("Invalid OTP".into()));
    }

    // The atomic consume is the serialization point: of two concurrent
    // verifications holding the same correct code, only one observes it
    // here. A resend between peek and consume also lands on this arm.
    match state.otp_store.consume(phone).await? {
        Some(consumed) if consumed == otp => {}
        _ => {
            return Err(AppError::AuthenticationFailed(
                "OTP expired or not requested".into(),
            ));
        }
    }

    let player = match queries::find_player_by_phone(&state.pool, phone).await? {
        Some(player) => player,
        None => {
            let player = queries::create_player(&state.pool, phone).await?;
            info!(player_id = %player.id, "auto-created player on first verification");
            player
        }
    };

    let token = jwt::issue_token(
        &player.id.to_string(),
        ROLE_PLAYER,
        state.config.jwt_secret.as_bytes(),
        state.config.jwt_expiry_minutes,
    )?;

    Ok(PlayerOtpVerifyResponse { token, player })
}

/// Authenticate a coach with email and password.
pub async fn coach_login(
    state: &AppState,
    email: &str,
    pw: &str,
) -> AppResult<CoachLoginResponse> {
    let coach = queries::find_coach_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("Coach not found".into()))?;

    if !password::verify_password(pw, &coach.password_hash)? {
        return Err(AppError::AuthenticationFailed("Invalid password".into()));
    }

    let token = jwt::issue_token(
        &coach.id.to_string(),
        ROLE_COACH,
        state.config.jwt_secret.as_bytes(),
        state.config.jwt_expiry_minutes,
    )?;

    Ok(CoachLoginResponse {
        token,
        coach: coach.into(),
    })
}
