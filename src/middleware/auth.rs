/**
 * Authentication Middleware
 *
 * This module provides the gate for routes that require a logged-in user.
 * It extracts the bearer token from the Authorization header, verifies it
 * against the shared signing keys, and attaches the caller's identity to the
 * request for handlers to pick up.
 *
 * The gate is stateless: it trusts the token's signature and expiry and does
 * not consult the database. A token outlives neither its expiry nor a secret
 * rotation.
 *
 * # Rejections
 *
 * Every failure is a 401. A missing header and a header without the
 * `Bearer ` prefix report "Authentication required"; a presented token that
 * fails verification reports the specific token error.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::TokenKeys;
use crate::error::ApiError;

/// Authenticated user identity extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches an [`AuthenticatedUser`] to the request extensions
///
/// Returns 401 if the token is missing, malformed, expired or forged.
pub async fn require_auth(
    State(keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::TokenMissing)?;

    // Expected format: "Bearer <token>"
    let token = header.strip_prefix("Bearer ").ok_or(ApiError::TokenMissing)?;

    let claims = keys.verify(token)?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extractor for handlers running behind [`require_auth`].
///
/// Rejects with 401 when the extension is absent, which only happens if a
/// route was wired up without the gate.
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(ApiError::TokenMissing)
    }
}
