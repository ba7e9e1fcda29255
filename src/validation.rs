//! Request validation.
//!
//! Pure functions that turn raw request DTOs into validated values, or fail
//! with `ApiError::Validation` carrying the exact client-facing message.
//! Handlers call these before touching the database, so every 400 in the API
//! originates here.
//!
//! A missing field and an empty string are treated identically throughout:
//! request DTOs use `Option<String>` and [`present`] collapses `None` and
//! `Some("")` into "absent". Whitespace-only strings count as present; the
//! checks that care about blank values trim explicitly.

use serde_json::Value;

use crate::auth::handlers::types::{LoginRequest, SignupRequest};
use crate::error::ApiError;
use crate::server::config::UserSchema;
use crate::todos::types::{CreateTodoRequest, UpdateTodoRequest};

/// Minimum accepted password length, in characters.
const MIN_PASSWORD_LEN: usize = 6;

/// Validated signup data, ready to insert.
///
/// `age` and `location` are always `None` under the basic schema, even when
/// the request supplied them.
#[derive(Debug)]
pub struct ValidSignup {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub location: Option<String>,
    pub password: String,
}

/// Validated login data.
#[derive(Debug)]
pub struct ValidLogin {
    pub email: String,
    pub password: String,
}

/// Validated todo creation data.
#[derive(Debug)]
pub struct ValidTodoCreate {
    pub title: String,
    pub completed: bool,
}

/// Validate a signup request against the configured schema.
///
/// Check order: field presence, email format, then (extended only) age,
/// name, location, and finally password length. The first failing check
/// decides the message.
pub fn signup(request: &SignupRequest, schema: UserSchema) -> Result<ValidSignup, ApiError> {
    match schema {
        UserSchema::Basic => {
            let (Some(name), Some(email), Some(password)) = (
                present(&request.name),
                present(&request.email),
                present(&request.password),
            ) else {
                return Err(ApiError::validation(
                    "All fields (name, email, password) are required",
                ));
            };

            if !is_valid_email(email) {
                return Err(ApiError::validation("Invalid email format"));
            }
            check_password_length(password)?;

            Ok(ValidSignup {
                name: name.to_string(),
                email: email.to_string(),
                age: None,
                location: None,
                password: password.to_string(),
            })
        }
        UserSchema::Extended => {
            let missing =
                "All fields (name, email, age, location, password) are required";
            let (Some(name), Some(email), Some(location), Some(password)) = (
                present(&request.name),
                present(&request.email),
                present(&request.location),
                present(&request.password),
            ) else {
                return Err(ApiError::validation(missing));
            };
            if !age_present(&request.age) {
                return Err(ApiError::validation(missing));
            }

            if !is_valid_email(email) {
                return Err(ApiError::validation("Invalid email format"));
            }
            let age = parse_age(&request.age)
                .ok_or_else(|| ApiError::validation("Age must be a positive number"))?;
            if name.trim().is_empty() {
                return Err(ApiError::validation("Name cannot be empty"));
            }
            if location.trim().is_empty() {
                return Err(ApiError::validation("Location cannot be empty"));
            }
            check_password_length(password)?;

            Ok(ValidSignup {
                name: name.to_string(),
                email: email.to_string(),
                age: Some(age),
                location: Some(location.to_string()),
                password: password.to_string(),
            })
        }
    }
}

/// Validate a login request. Presence only; no format or length checks.
pub fn login(request: &LoginRequest) -> Result<ValidLogin, ApiError> {
    let (Some(email), Some(password)) =
        (present(&request.email), present(&request.password))
    else {
        return Err(ApiError::validation("Email and password are required"));
    };

    Ok(ValidLogin {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Validate a todo creation request.
///
/// The title must be present and not blank; it is stored as given, without
/// trimming. `completed` defaults to false.
pub fn todo_create(request: &CreateTodoRequest) -> Result<ValidTodoCreate, ApiError> {
    let title = match request.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => return Err(ApiError::validation("Todo title is required")),
    };

    Ok(ValidTodoCreate {
        title,
        completed: request.completed.unwrap_or(false),
    })
}

/// Validate a todo update request.
///
/// Absent fields are fine (partial update), but a title that is present must
/// satisfy the same non-blank rule as on create.
pub fn todo_update(request: &UpdateTodoRequest) -> Result<(), ApiError> {
    if let Some(title) = request.title.as_deref() {
        if title.trim().is_empty() {
            return Err(ApiError::validation("Todo title is required"));
        }
    }
    Ok(())
}

/// Collapse `None` and `Some("")` into "absent".
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn check_password_length(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(
            "Password must be at least 6 characters long",
        ));
    }
    Ok(())
}

/// Presence check for the age field.
///
/// Age arrives as an arbitrary JSON value, and presence follows the same
/// emptiness notion as the string fields: null, the empty string, zero and
/// false all count as absent.
fn age_present(age: &Option<Value>) -> bool {
    match age {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::Bool(b)) => *b,
        Some(_) => true,
    }
}

/// Parse age as a positive integer from a JSON number or numeric string.
///
/// Fractional numbers and strings with trailing garbage are rejected rather
/// than truncated.
fn parse_age(age: &Option<Value>) -> Option<i32> {
    let value = match age.as_ref()? {
        Value::Number(n) => i32::try_from(n.as_i64()?).ok()?,
        Value::String(s) => s.trim().parse::<i32>().ok()?,
        _ => return None,
    };
    (value > 0).then_some(value)
}

/// Basic email shape: one `@`, non-empty parts, no whitespace, and a dot
/// inside the domain that is neither leading nor trailing.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}
