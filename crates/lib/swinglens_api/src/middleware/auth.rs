//! Authentication middleware — Bearer token extraction, verification, and
//! role gating.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use swinglens_core::auth::jwt::{TokenClaims, verify_token};

use crate::AppState;
use crate::error::AppError;

/// Key used to store `TokenClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies it,
/// and injects `AuthenticatedUser` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationFailed("Not authenticated".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::AuthenticationFailed("Not authenticated".into()))?;

    let claims =
        verify_token(token, state.config.jwt_secret.as_bytes()).map_err(AppError::from)?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

/// Axum middleware: requires the authenticated user to hold `role`. Must be
/// layered after [`require_auth`].
pub async fn require_role(
    role: &'static str,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::AuthenticationFailed("Not authenticated".into()))?;

    if user.0.role != role {
        return Err(AppError::Forbidden(format!("Role '{role}' required")));
    }

    Ok(next.run(request).await)
}
