//! Tickbox - Main Library
//!
//! Tickbox is a small JSON-over-HTTP backend for per-user todo lists with
//! token-based authentication, backed by PostgreSQL.
//!
//! # Overview
//!
//! The library provides:
//! - User registration and login with bcrypt password hashing
//! - Stateless bearer-token authentication (HS256, 1-hour expiry)
//! - Per-user todo CRUD with ownership enforced in the database writes
//! - A configurable signup schema (basic or extended profile fields)
//!
//! # Module Structure
//!
//! - **`auth`** - Users, password hashing, token keys, auth handlers
//! - **`todos`** - Todo model, database operations, CRUD handlers
//! - **`middleware`** - The bearer-token gate for protected routes
//! - **`validation`** - Request validation with client-facing messages
//! - **`routes`** - Router assembly, health endpoint, 404 fallback
//! - **`server`** - Configuration, application state, initialization
//! - **`error`** - The one error type every handler returns
//!
//! # Usage
//!
//! ```rust,no_run
//! use tickbox::server::config::AppConfig;
//! use tickbox::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, error::ApiError>`; every failure becomes a
//! JSON body of the form `{"error": <message>, "status": <code>}` with the
//! matching HTTP status.

/// Users, tokens and auth handlers
pub mod auth;

/// Error type and response conversion
pub mod error;

/// Request middleware (authentication gate)
pub mod middleware;

/// Route configuration
pub mod routes;

/// Configuration, state and initialization
pub mod server;

/// Todo model and handlers
pub mod todos;

/// Request validation
pub mod validation;
