/**
 * API Route Configuration
 *
 * This module defines the two route groups of the API:
 *
 * ## Public routes
 * - `POST /api/signup` - User registration
 * - `POST /signup` - Registration alias used by extended-schema clients
 * - `POST /api/login` - User login
 * - `GET /myprofile` - Profile lookup by name
 *
 * ## Protected routes (bearer token required)
 * - `POST /api/todos` - Create a todo
 * - `GET /api/todos` - List the caller's todos
 * - `PUT /api/todos/{id}` - Update a todo
 * - `DELETE /api/todos/{id}` - Delete a todo
 *
 * The gate is attached with `route_layer`, so it runs only for routes that
 * actually matched; unknown paths fall through to the 404 handler without
 * being challenged for a token.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::auth::{get_profile, login, signup};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;
use crate::todos::{create_todo, delete_todo, get_todos, update_todo};

/// Routes that require no authentication.
///
/// Both signup paths hit the same handler; the configured schema, not the
/// path, decides which fields are required.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/signup", post(signup))
        .route("/signup", post(signup))
        .route("/api/login", post(login))
        .route("/myprofile", get(get_profile))
}

/// Todo routes, all behind the authentication gate.
pub fn todo_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/todos", post(create_todo).get(get_todos))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
