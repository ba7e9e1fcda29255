//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the unauthenticated endpoints:
//! registration, login and the profile lookup.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── profile.rs  - Profile lookup handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/signup and POST /signup - User registration
//! - **`login`** - POST /api/login - User authentication
//! - **`get_profile`** - GET /myprofile - Profile lookup by name
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Bearer tokens are used for stateless authentication, expiring after 1 hour
//! - Invalid credentials return 401 without revealing which field was wrong

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Profile lookup handler
pub mod profile;

// Re-export handlers
pub use login::login;
pub use profile::get_profile;
pub use signup::signup;
