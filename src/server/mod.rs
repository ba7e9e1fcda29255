//! Server Module
//!
//! This module contains the code for configuring and initializing the HTTP
//! server: loading configuration from the environment, assembling the shared
//! application state, and building the router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration loading
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Database connection, migrations, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env` reads and validates every
//!    variable up front; a bad environment aborts startup
//! 2. **Database**: `create_app` connects the pool and runs migrations
//! 3. **State**: pool, token keys and signup schema go into `AppState`
//! 4. **Router**: all routes and middleware are wired against that state

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError, UserSchema};
pub use init::{create_app, InitError};
pub use state::AppState;
