/**
 * Authentication Handler Types
 *
 * Request and response types for the signup, login and profile handlers.
 *
 * Request fields are all `Option<String>` on purpose: the validation layer
 * treats a missing field and an empty string the same way, so deserialization
 * must not reject bodies that leave fields out. Response types never carry
 * the password hash or the extended profile columns unless the endpoint is
 * explicitly about them.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sign up request
///
/// One shape for both signup schemas. Under the basic schema `age` and
/// `location` are accepted but ignored; under the extended schema they are
/// required.
#[derive(Deserialize, Debug)]
pub struct SignupRequest {
    /// User's display name
    pub name: Option<String>,
    /// User's email address
    pub email: Option<String>,
    /// User's password (hashed before storage)
    pub password: Option<String>,
    /// User's age; accepts a JSON number or a numeric string
    #[serde(default)]
    pub age: Option<serde_json::Value>,
    /// User's location
    pub location: Option<String>,
}

/// Login request
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Query parameters for the profile lookup
#[derive(Deserialize, Debug)]
pub struct ProfileQuery {
    pub name: Option<String>,
}

/// User information that is safe to return to clients
///
/// Deliberately just name and email. No id, no password hash, no extended
/// columns.
#[derive(Serialize, Debug)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
}

/// Signup response (201)
#[derive(Serialize, Debug)]
pub struct SignupResponse {
    pub message: &'static str,
    pub user: UserSummary,
}

/// Login response (200)
///
/// Carries the freshly issued bearer token alongside the user summary.
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserSummary,
}

/// Profile response (200)
///
/// The one place the extended columns are exposed; they serialize as `null`
/// for users created under the basic schema.
#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub location: Option<String>,
}
