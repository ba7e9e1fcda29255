//! Middleware Module
//!
//! This module contains the HTTP middleware for the server. Currently that
//! is the authentication gate, which protects the todo routes:
//!
//! - **`auth`** - Bearer-token gate and the `AuthenticatedUser` extractor

pub mod auth;

pub use auth::{require_auth, AuthenticatedUser};
