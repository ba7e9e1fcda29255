/**
 * Profile Handler
 *
 * This module implements the unauthenticated profile lookup for
 * GET /myprofile?name=<name>, part of the extended-schema route group.
 *
 * Display names are not unique; when several users share one, the
 * earliest-registered account is returned. The response includes the
 * extended columns, which are null for users created under the basic schema.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::PgPool;

use crate::auth::handlers::types::{ProfileQuery, ProfileResponse};
use crate::auth::users::get_user_by_name;
use crate::error::ApiError;

/// Profile lookup handler
pub async fn get_profile(
    State(pool): State<PgPool>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let name = match query.name.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => name,
        None => return Err(ApiError::validation("Name query parameter is required")),
    };

    let Some(user) = get_user_by_name(&pool, name).await? else {
        return Err(ApiError::NotFound("User not found"));
    };

    Ok(Json(ProfileResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        age: user.age,
        location: user.location,
    }))
}
