//! Authentication Module
//!
//! This module handles user registration, login and token management. It
//! owns the user table and the JWT keys; the request gate that consumes the
//! tokens lives in `middleware::auth`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── tokens.rs       - JWT issuing and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── profile.rs  - Profile lookup handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: Validated request → password hashed → user row inserted
//! 2. **Login**: Credentials verified against the stored hash → 1-hour token issued
//! 3. **Protected request**: Bearer token verified by the gate → user identity
//!    attached to the request
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are signed with HS256 and expire after 1 hour
//! - Login failures return 401 without revealing whether the email exists

/// User data model and database operations
pub mod users;

/// JWT issuing and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_profile, login, signup};
pub use tokens::{Claims, TokenError, TokenKeys};
