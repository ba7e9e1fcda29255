/**
 * Error Conversion
 *
 * Turns an ApiError into the HTTP response the client receives. Every error
 * becomes JSON with the same two fields:
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Server-side failures (500) are logged at error level with the underlying
 * message; authentication and ownership rejections at warn. Client mistakes
 * (400/404/409) are not logged here.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                error!(status = status.as_u16(), "request failed: {message}")
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(status = status.as_u16(), "request rejected: {message}")
            }
            _ => {}
        }

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));
        (status, body).into_response()
    }
}
