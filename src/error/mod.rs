//! API Error Module
//!
//! This module defines the error type returned by every HTTP handler and the
//! conversion that turns it into a JSON response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Response Format
//!
//! Every error becomes a JSON body of the form
//! `{"error": <message>, "status": <code>}` with the matching HTTP status.
//! Handlers return `Result<_, ApiError>` and rely on `?` to reach this
//! conversion; there is no other error path to the client.

/// Error type definition
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
