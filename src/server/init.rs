/**
 * Server Initialization
 *
 * This module turns a loaded configuration into a ready-to-serve router.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL
 * 2. Run pending migrations
 * 3. Assemble the application state
 * 4. Build the router
 *
 * # Error Handling
 *
 * Every step is fatal. If PostgreSQL is unreachable or a migration fails,
 * `create_app` returns the error and startup aborts.
 */

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Startup failures, all fatal
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the application
///
/// Connects, migrates, and returns the fully wired router.
pub async fn create_app(config: &AppConfig) -> Result<Router, InitError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url)
        .await
        .map_err(InitError::Connect)?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    let state = AppState::new(pool, config);
    let app = create_router(state);
    tracing::info!(
        "Router configured (signup schema: {:?})",
        config.user_schema
    );

    Ok(app)
}
