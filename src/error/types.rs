/**
 * API Error Types
 *
 * Single error enum for everything a handler can fail with. Each variant maps
 * to exactly one HTTP status, and the `Display` string of a variant is the
 * exact message the client sees in the JSON body.
 *
 * # Error Categories
 *
 * - Validation failures (400) carry the specific message produced by the
 *   validation layer.
 * - Authentication failures (401) cover a missing bearer token, a rejected
 *   token, and bad login credentials. Login failures never reveal whether the
 *   email or the password was wrong.
 * - Ownership failures (403) mean the todo exists but belongs to another user.
 * - Lookup misses (404) carry a static resource message.
 * - Duplicate signup emails (409) are detected from the database unique
 *   constraint, not from a prior read.
 * - Wrapped infrastructure errors (500) expose the underlying error message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::tokens::TokenError;

/// Everything a request handler can fail with.
///
/// Handlers return `Result<_, ApiError>`; the `IntoResponse` impl in
/// [`conversion`](crate::error::conversion) turns each variant into the JSON
/// error body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation
    ///
    /// The message is client-facing and already phrased for the response body
    /// (e.g. "Todo title is required").
    #[error("{0}")]
    Validation(String),

    /// Protected route reached without a usable bearer token
    ///
    /// Covers a missing `Authorization` header as well as one without the
    /// `Bearer ` prefix.
    #[error("Authentication required")]
    TokenMissing,

    /// Bearer token was presented but rejected
    ///
    /// The wrapped [`TokenError`] distinguishes expired, bad-signature and
    /// malformed tokens; all of them answer 401.
    #[error(transparent)]
    TokenRejected(#[from] TokenError),

    /// Login failed
    ///
    /// Deliberately the same message whether the email was unknown or the
    /// password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Todo exists but is owned by a different user
    ///
    /// `action` is the verb for the attempted mutation ("update" / "delete").
    #[error("Access denied. You can only {action} your own todos")]
    AccessDenied { action: &'static str },

    /// Resource lookup missed
    #[error("{0}")]
    NotFound(&'static str),

    /// Signup email collided with an existing user
    ///
    /// Produced when the insert hits the `users.email` unique constraint.
    #[error("Email already exists")]
    EmailExists,

    /// Database operation failed
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failed
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),

    /// Signing a fresh token failed
    #[error(transparent)]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error with a client-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `TokenMissing` / `TokenRejected` / `InvalidCredentials` - 401 Unauthorized
    /// - `AccessDenied` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `EmailExists` - 409 Conflict
    /// - `Database` / `Hash` / `TokenCreation` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::TokenMissing | Self::TokenRejected(_) | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::AccessDenied { .. } => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::EmailExists => StatusCode::CONFLICT,
            Self::Database(_) | Self::Hash(_) | Self::TokenCreation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
