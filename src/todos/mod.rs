//! Todos Module
//!
//! Per-user todo CRUD. Every operation is scoped to the authenticated owner;
//! the db layer filters on `user_id` so a wrong owner and a missing row look
//! the same until the handler disambiguates them.

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{create_todo, delete_todo, get_todos, update_todo};
