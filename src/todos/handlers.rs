/**
 * Todo Handlers
 *
 * HTTP handlers for the protected todo endpoints. All of them run behind the
 * auth gate and take the owner from the verified token, never from the
 * request body or path.
 *
 * # Handlers
 *
 * - **`create_todo`** - POST /api/todos
 * - **`get_todos`** - GET /api/todos
 * - **`update_todo`** - PUT /api/todos/{id}
 * - **`delete_todo`** - DELETE /api/todos/{id}
 *
 * # Ownership
 *
 * Update and delete are single conditional writes scoped to the owner. When
 * the write matches nothing, a follow-up owner lookup decides between 403
 * (exists, someone else's) and 404 (no such todo). The path id is accepted
 * as a raw string so that a non-UUID value answers 404 like any other
 * missing todo instead of a path rejection.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::todos::db;
use crate::todos::types::{
    CreateTodoRequest, DeleteTodoResponse, TodoListResponse, TodoResponse, UpdateTodoRequest,
};
use crate::validation;

/// Create todo handler
pub async fn create_todo(
    State(pool): State<PgPool>,
    user: AuthenticatedUser,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let valid = validation::todo_create(&request)?;

    let todo = db::insert_todo(&pool, valid.title, valid.completed, user.user_id).await?;
    tracing::info!("Todo {} created for user {}", todo.id, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            message: "Todo created successfully",
            todo,
        }),
    ))
}

/// List todos handler, newest first
pub async fn get_todos(
    State(pool): State<PgPool>,
    user: AuthenticatedUser,
) -> Result<Json<TodoListResponse>, ApiError> {
    let todos = db::list_todos(&pool, user.user_id).await?;
    let count = todos.len();

    Ok(Json(TodoListResponse { todos, count }))
}

/// Update todo handler
///
/// Partial update: omitted fields keep their stored values, and a body with
/// no fields at all is a valid no-op that returns the unchanged todo.
pub async fn update_todo(
    State(pool): State<PgPool>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = parse_todo_id(&id)?;
    validation::todo_update(&request)?;

    let updated = db::update_todo(
        &pool,
        id,
        user.user_id,
        request.title.as_deref(),
        request.completed,
    )
    .await?;

    match updated {
        Some(todo) => Ok(Json(TodoResponse {
            message: "Todo updated successfully",
            todo,
        })),
        None => Err(refusal_for(&pool, id, "update").await),
    }
}

/// Delete todo handler
pub async fn delete_todo(
    State(pool): State<PgPool>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteTodoResponse>, ApiError> {
    let id = parse_todo_id(&id)?;

    if db::delete_todo(&pool, id, user.user_id).await? {
        tracing::info!("Todo {} deleted by user {}", id, user.user_id);
        Ok(Json(DeleteTodoResponse {
            message: "Todo deleted successfully",
        }))
    } else {
        Err(refusal_for(&pool, id, "delete").await)
    }
}

/// A path id that is not a UUID cannot name any todo.
fn parse_todo_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound("Todo not found"))
}

/// Decide why an owner-scoped write matched nothing.
///
/// The todo either belongs to someone else (403, message carries the
/// attempted action) or does not exist (404). If the disambiguating lookup
/// itself fails, that error wins.
async fn refusal_for(pool: &PgPool, id: Uuid, action: &'static str) -> ApiError {
    match db::todo_owner(pool, id).await {
        Ok(Some(_)) => ApiError::AccessDenied { action },
        Ok(None) => ApiError::NotFound("Todo not found"),
        Err(error) => ApiError::Database(error),
    }
}
