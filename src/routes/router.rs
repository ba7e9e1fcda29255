/**
 * Router Configuration
 *
 * This module assembles the complete router: public auth routes, protected
 * todo routes, the health endpoint, and the JSON 404 fallback, wrapped in
 * request tracing and a permissive CORS layer.
 *
 * # Route Order
 *
 * Route groups are merged before the fallback is installed, so any path that
 * matches nothing answers with the same JSON error shape as the rest of the
 * API rather than axum's default empty 404.
 */

use axum::{response::Json, routing::get, Router};
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::error::ApiError;
use crate::routes::api_routes::{public_routes, todo_routes};
use crate::server::state::AppState;

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(todo_routes(&state))
        .route("/health", get(health_check))
        .fallback(route_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe. No database round-trip; a serving process answers OK.
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// JSON 404 for anything no route matched.
async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found")
}
