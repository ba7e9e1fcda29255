/**
 * Signup Handler
 *
 * This module implements user registration for POST /api/signup and its
 * schema-variant alias POST /signup.
 *
 * # Registration Process
 *
 * 1. Validate the request against the configured signup schema
 * 2. Hash the password using bcrypt
 * 3. Insert the user row
 * 4. Map a unique violation on the email column to 409
 *
 * There is no pre-insert existence check. The `users.email` UNIQUE
 * constraint is the only authority on duplicates, so two concurrent signups
 * for the same email cannot both succeed; the loser of the race gets the
 * same 409 as a plain retry would.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - The response echoes name and email only, never the password or the
 *   extended profile fields
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{SignupRequest, SignupResponse, UserSummary};
use crate::auth::users::{create_user, is_unique_violation};
use crate::error::ApiError;
use crate::server::config::UserSchema;
use crate::validation;

/// Sign up handler
///
/// Validates according to the configured schema, stores the new user and
/// answers 201. Duplicate emails answer 409 regardless of which schema the
/// request came through.
pub async fn signup(
    State(pool): State<PgPool>,
    State(schema): State<UserSchema>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let valid = validation::signup(&request, schema)?;
    tracing::info!("Signup request for email: {}", valid.email);

    let password_hash = hash(&valid.password, DEFAULT_COST)?;

    let user = match create_user(
        &pool,
        valid.name,
        valid.email,
        valid.age,
        valid.location,
        password_hash,
    )
    .await
    {
        Ok(user) => user,
        Err(error) if is_unique_violation(&error) => {
            tracing::warn!("Signup rejected, email already exists");
            return Err(ApiError::EmailExists);
        }
        Err(error) => return Err(error.into()),
    };

    tracing::info!("User registered: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully",
            user: UserSummary {
                name: user.name,
                email: user.email,
            },
        }),
    ))
}
