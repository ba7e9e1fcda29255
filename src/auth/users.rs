/**
 * User Model and Database Operations
 *
 * This module handles user rows and their database operations. One table
 * serves both signup schemas: the extended columns (`age`, `location`) are
 * nullable and stay NULL for users registered under the basic schema.
 *
 * Email uniqueness is not checked here. The `users.email` UNIQUE constraint
 * is the single authority; callers inspect insert failures with
 * [`is_unique_violation`] to map the collision to a conflict response.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User row as stored in the database.
///
/// Never serialized directly; response types pick the fields that are safe
/// to expose.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name (not unique)
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Age, extended schema only
    pub age: Option<i32>,
    /// Location, extended schema only
    pub location: Option<String>,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert a new user row.
///
/// Fails with a unique violation when the email is already taken; callers
/// translate that with [`is_unique_violation`].
pub async fn create_user(
    pool: &PgPool,
    name: String,
    email: String,
    age: Option<i32>,
    location: Option<String>,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, age, location, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, email, age, location, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(&email)
    .bind(age)
    .bind(&location)
    .bind(&password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, age, location, password_hash, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by display name.
///
/// Names are not unique; this returns the earliest-registered match.
pub async fn get_user_by_name(pool: &PgPool, name: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, age, location, password_hash, created_at
        FROM users
        WHERE name = $1
        ORDER BY created_at
        LIMIT 1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// True when an insert failed on a unique constraint.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}
