/**
 * Server Configuration
 *
 * This module loads everything the server needs from the environment, once,
 * at startup. The result is a plain `AppConfig` value that gets passed down
 * explicitly; no other module reads environment variables.
 *
 * # Configuration Sources
 *
 * | Variable       | Required | Default | Meaning                              |
 * |----------------|----------|---------|--------------------------------------|
 * | `PORT`         | no       | 3000    | TCP port to listen on                |
 * | `DATABASE_URL` | yes      | -       | PostgreSQL connection string         |
 * | `JWT_SECRET`   | yes      | -       | HS256 signing secret                 |
 * | `USER_SCHEMA`  | no       | basic   | Signup shape: `basic` or `extended`  |
 *
 * # Error Handling
 *
 * A missing required variable or an unparseable value fails startup with a
 * typed `ConfigError`. The server never limps along with partial
 * configuration.
 */

use thiserror::Error;

/// Default port when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Which signup shape the server accepts.
///
/// `Basic` signups take name, email and password. `Extended` signups
/// additionally require age and location. The setting changes validation
/// only; both shapes share one `users` table, with the extended columns
/// nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSchema {
    Basic,
    Extended,
}

impl UserSchema {
    /// Parse the `USER_SCHEMA` value, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "extended" => Some(Self::Extended),
            _ => None,
        }
    }
}

/// Configuration errors that abort startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or blank
    #[error("{0} must be set")]
    MissingVar(&'static str),

    /// `PORT` was set but is not a valid port number
    #[error("PORT must be a valid port number, got \"{0}\"")]
    InvalidPort(String),

    /// `USER_SCHEMA` was set but is neither `basic` nor `extended`
    #[error("USER_SCHEMA must be \"basic\" or \"extended\", got \"{0}\"")]
    InvalidUserSchema(String),
}

/// Server configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to listen on
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Shared secret for signing and verifying tokens
    pub jwt_secret: String,
    /// Signup shape the server accepts
    pub user_schema: UserSchema,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Call after `dotenv` so `.env` values are visible. Fails on the first
    /// missing or invalid variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let user_schema = match std::env::var("USER_SCHEMA") {
            Ok(raw) => {
                UserSchema::parse(&raw).ok_or(ConfigError::InvalidUserSchema(raw))?
            }
            Err(_) => UserSchema::Basic,
        };

        Ok(Self {
            port,
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            user_schema,
        })
    }
}

/// Read a required variable, treating a blank value as unset.
fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
