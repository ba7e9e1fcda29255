/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The PostgreSQL connection pool
 * - The token signing/verification keys
 * - The configured signup schema
 *
 * All three are cheap to clone (the pool is an internal Arc, the keys and
 * schema are small values), so the state is cloned per request without
 * ceremony.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for exactly the piece they
 * need (`State<PgPool>`, `State<TokenKeys>`, `State<UserSchema>`) instead of
 * the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;
use crate::server::config::{AppConfig, UserSchema};

/// Application state shared by all routes
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Token signing and verification keys
    pub tokens: TokenKeys,
    /// Signup schema the server was configured with
    pub schema: UserSchema,
}

impl AppState {
    /// Assemble the state from an established pool and the loaded config.
    pub fn new(pool: PgPool, config: &AppConfig) -> Self {
        Self {
            pool,
            tokens: TokenKeys::new(config.jwt_secret.as_bytes()),
            schema: config.user_schema,
        }
    }
}

/// Allows handlers to take `State<PgPool>` directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allows the auth gate and the login handler to take `State<TokenKeys>`
impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Allows the signup handler to take `State<UserSchema>`
impl FromRef<AppState> for UserSchema {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.schema
    }
}
