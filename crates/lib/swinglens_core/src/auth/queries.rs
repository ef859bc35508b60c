//! Auth-related database queries.

use sqlx::PgPool;

use super::AuthError;
use crate::models::coach::Coach;
use crate::models::player::Player;

/// Fetch a player by phone number.
pub async fn find_player_by_phone(
    pool: &PgPool,
    phone: &str,
) -> Result<Option<Player>, AuthError> {
    let player = sqlx::query_as::<_, Player>(
        "SELECT id, academy_id, coach_id, name, phone, handicap, skill_level, \
                dominant_hand, created_at \
         FROM players WHERE phone = $1",
    )
    .bind(phone)
    .fetch_optional(pool)
    .await?;
    Ok(player)
}

/// Create a player with an empty name and column defaults, returning the
/// persisted record. Used by the first successful OTP verification.
pub async fn create_player(pool: &PgPool, phone: &str) -> Result<Player, AuthError> {
    let player = sqlx::query_as::<_, Player>(
        "INSERT INTO players (name, phone) VALUES ($1, $2) \
         RETURNING id, academy_id, coach_id, name, phone, handicap, skill_level, \
                   dominant_hand, created_at",
    )
    .bind("")
    .bind(phone)
    .fetch_one(pool)
    .await?;
    Ok(player)
}

/// Fetch a coach by email, including the password hash.
pub async fn find_coach_by_email(pool: &PgPool, email: &str) -> Result<Option<Coach>, AuthError> {
    let coach = sqlx::query_as::<_, Coach>(
        "SELECT id, academy_id, name, email, password_hash, phone, is_active, created_at \
         FROM coaches WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(coach)
}
