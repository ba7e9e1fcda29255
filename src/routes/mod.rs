//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, health endpoint, 404 fallback
//! └── api_routes.rs   - Public and protected route groups
//! ```
//!
//! # Route Map
//!
//! | Method | Path              | Auth | Handler          |
//! |--------|-------------------|------|------------------|
//! | POST   | `/api/signup`     | no   | `signup`         |
//! | POST   | `/signup`         | no   | `signup`         |
//! | POST   | `/api/login`      | no   | `login`          |
//! | GET    | `/myprofile`      | no   | `get_profile`    |
//! | POST   | `/api/todos`      | yes  | `create_todo`    |
//! | GET    | `/api/todos`      | yes  | `get_todos`      |
//! | PUT    | `/api/todos/{id}` | yes  | `update_todo`    |
//! | DELETE | `/api/todos/{id}` | yes  | `delete_todo`    |
//! | GET    | `/health`         | no   | `health_check`   |

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
