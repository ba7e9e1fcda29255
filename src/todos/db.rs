//! Database operations for todos
//!
//! Mutations never touch rows the caller does not own: update and delete
//! filter on `id AND user_id` in a single statement, so ownership is enforced
//! by the write itself rather than by a separate read. A miss (`None` /
//! `false`) means "absent or not yours"; [`todo_owner`] lets the handler tell
//! those apart after the fact.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Todo row as stored and as serialized in responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique todo ID (UUID)
    pub id: Uuid,
    /// Title, stored exactly as submitted
    pub title: String,
    /// Completion state
    pub completed: bool,
    /// Owning user's ID
    pub user_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert a new todo for a user.
pub async fn insert_todo(
    pool: &PgPool,
    title: String,
    completed: bool,
    user_id: Uuid,
) -> Result<Todo, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let todo = sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (id, title, completed, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, completed, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(&title)
    .bind(completed)
    .bind(user_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(todo)
}

/// List a user's todos, newest first.
pub async fn list_todos(pool: &PgPool, user_id: Uuid) -> Result<Vec<Todo>, sqlx::Error> {
    let todos = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, title, completed, user_id, created_at
        FROM todos
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(todos)
}

/// Apply a partial update to a todo the user owns.
///
/// `None` fields keep their stored value. Returns `None` when no row matched
/// the id/owner pair, without saying which half failed.
pub async fn update_todo(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    title: Option<&str>,
    completed: Option<bool>,
) -> Result<Option<Todo>, sqlx::Error> {
    let todo = sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET title = COALESCE($3, title), completed = COALESCE($4, completed)
        WHERE id = $1 AND user_id = $2
        RETURNING id, title, completed, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind(completed)
    .fetch_optional(pool)
    .await?;

    Ok(todo)
}

/// Delete a todo the user owns. Returns whether a row was removed.
pub async fn delete_todo(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM todos
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Look up who owns a todo, if it exists at all.
pub async fn todo_owner(pool: &PgPool, id: Uuid) -> Result<Option<Uuid>, sqlx::Error> {
    let owner = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT user_id
        FROM todos
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(owner)
}
