//! Identity token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// Claims embedded in an identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — account ID (standard JWT `sub` claim).
    pub sub: String,
    /// Account role (e.g. `"player"`, `"coach"`).
    pub role: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Decoded form used to detect a well-signed token with missing claims.
#[derive(Debug, Deserialize)]
struct RawClaims {
    sub: Option<String>,
    role: Option<String>,
    exp: i64,
}

/// Issue a signed identity token (HS256) expiring `expiry_minutes` from now.
pub fn issue_token(
    subject: &str,
    role: &str,
    secret: &[u8],
    expiry_minutes: i64,
) -> Result<String, AuthError> {
    let expire = Utc::now() + Duration::minutes(expiry_minutes);
    let claims = TokenClaims {
        sub: subject.to_string(),
        role: role.to_string(),
        exp: expire.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Internal(format!("jwt encode: {e}")))
}

/// Verify an identity token, returning the claims on success.
///
/// A token that fails to decode (bad signature, expired, malformed) maps to
/// [`AuthError::InvalidToken`]; a well-signed token missing the subject or
/// role claim maps to [`AuthError::InvalidTokenPayload`].
pub fn verify_token(token: &str, secret: &[u8]) -> Result<TokenClaims, AuthError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;

    let data =
        decode::<RawClaims>(token, &key, &validation).map_err(|_| AuthError::InvalidToken)?;

    let RawClaims { sub, role, exp } = data.claims;
    match (sub, role) {
        (Some(sub), Some(role)) => Ok(TokenClaims { sub, role, exp }),
        _ => Err(AuthError::InvalidTokenPayload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{ROLE_COACH, ROLE_PLAYER};

    const SECRET: &[u8] = b"test-secret";
    const EXPIRY_MINUTES: i64 = 1440;

    #[test]
    fn roundtrip_preserves_subject_and_role() {
        let token = issue_token("player-1", ROLE_PLAYER, SECRET, EXPIRY_MINUTES).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "player-1");
        assert_eq!(claims.role, ROLE_PLAYER);
    }

    #[test]
    fn expiry_matches_configured_offset() {
        let token = issue_token("coach-1", ROLE_COACH, SECRET, EXPIRY_MINUTES).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        let expected = (Utc::now() + Duration::minutes(EXPIRY_MINUTES)).timestamp();
        assert!((claims.exp - expected).abs() <= 5);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("player-1", ROLE_PLAYER, SECRET, EXPIRY_MINUTES).unwrap();
        let err = verify_token(&token, b"other-secret").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the decoder's default leeway.
        let claims = TokenClaims {
            sub: "player-1".into(),
            role: ROLE_PLAYER.into(),
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn missing_role_claim_is_rejected_as_payload_error() {
        #[derive(Serialize)]
        struct NoRole {
            sub: String,
            exp: i64,
        }
        let claims = NoRole {
            sub: "player-1".into(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AuthError::InvalidTokenPayload));
    }

    #[test]
    fn missing_subject_claim_is_rejected_as_payload_error() {
        #[derive(Serialize)]
        struct NoSub {
            role: String,
            exp: i64,
        }
        let claims = NoSub {
            role: ROLE_PLAYER.into(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AuthError::InvalidTokenPayload));
    }
}
