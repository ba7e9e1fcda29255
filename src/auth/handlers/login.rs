/**
 * Login Handler
 *
 * This module implements user authentication for POST /api/login.
 *
 * # Login Process
 *
 * 1. Validate that email and password are present
 * 2. Look the user up by email
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a one-hour bearer token
 *
 * # Security
 *
 * An unknown email and a wrong password produce byte-identical 401
 * responses, so the endpoint cannot be used to probe which emails have
 * accounts.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::auth::handlers::types::{LoginRequest, LoginResponse, UserSummary};
use crate::auth::tokens::TokenKeys;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::validation;

/// Login handler
///
/// Returns the freshly issued token together with the user's name and email.
pub async fn login(
    State(pool): State<PgPool>,
    State(keys): State<TokenKeys>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let valid = validation::login(&request)?;

    let Some(user) = get_user_by_email(&pool, &valid.email).await? else {
        return Err(ApiError::InvalidCredentials);
    };

    if !verify(&valid.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.issue(user.id, user.email.clone())?;
    tracing::info!("Login successful for {}", user.email);

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        user: UserSummary {
            name: user.name,
            email: user.email,
        },
    }))
}
