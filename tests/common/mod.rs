//! Common test utilities and helpers
//!
//! This module provides shared utilities for all integration tests:
//! - Database test fixture and app construction
//! - Request helpers and auth flows

pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
