/**
 * Todo Handler Types
 *
 * Request and response types for the todo CRUD handlers. As with the auth
 * types, request fields are `Option` so missing and empty values reach the
 * validation layer instead of failing deserialization.
 */

use serde::{Deserialize, Serialize};

use crate::todos::db::Todo;

/// Create todo request
#[derive(Deserialize, Debug)]
pub struct CreateTodoRequest {
    /// Todo title; required, must not be blank
    pub title: Option<String>,
    /// Initial completion state, defaults to false
    pub completed: Option<bool>,
}

/// Update todo request
///
/// Both fields optional; an omitted field leaves the stored value unchanged.
/// A title that is present but blank is rejected, same as on create.
#[derive(Deserialize, Debug)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Response for create and update (includes the affected row)
#[derive(Serialize, Debug)]
pub struct TodoResponse {
    pub message: &'static str,
    pub todo: Todo,
}

/// Response for the list endpoint
#[derive(Serialize, Debug)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
    pub count: usize,
}

/// Response for delete (no row to return)
#[derive(Serialize, Debug)]
pub struct DeleteTodoResponse {
    pub message: &'static str,
}
