//! Todo CRUD integration tests
//!
//! Every route here sits behind the token gate. Since verification is
//! stateless, validation-only paths can run over a lazy pool with a
//! self-signed token; anything that touches rows needs the test database.

use axum::http::{Method, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use serial_test::serial;
use uuid::Uuid;

use crate::common::{lazy_app, send_json, signup_and_login, test_token, TestDatabase};
use tickbox::server::config::UserSchema;

/// Create a todo through the API and return its id.
async fn create_todo(app: &Router, token: &str, body: Value) -> Value {
    let (status, body) = send_json(app, Method::POST, "/api/todos", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "todo creation failed: {body}");
    body["todo"].clone()
}

fn todo_id(todo: &Value) -> String {
    todo["id"].as_str().expect("todo carried no id").to_string()
}

#[tokio::test]
async fn test_create_todo_requires_title() {
    let app = lazy_app(UserSchema::Basic);
    let token = test_token(Uuid::new_v4(), "ghost@example.com");

    for body in [json!({}), json!({ "title": "" }), json!({ "title": "   " })] {
        let (status, response) =
            send_json(&app, Method::POST, "/api/todos", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "Todo title is required");
    }
}

#[tokio::test]
async fn test_update_todo_rejects_blank_title() {
    let app = lazy_app(UserSchema::Basic);
    let token = test_token(Uuid::new_v4(), "ghost@example.com");
    let path = format!("/api/todos/{}", Uuid::new_v4());

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &path,
        Some(&token),
        Some(json!({ "title": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Todo title is required");
}

#[tokio::test]
async fn test_non_uuid_todo_id_reads_as_not_found() {
    let app = lazy_app(UserSchema::Basic);
    let token = test_token(Uuid::new_v4(), "ghost@example.com");

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/todos/not-a-uuid",
        Some(&token),
        Some(json!({ "completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Todo not found");

    let (status, body) =
        send_json(&app, Method::DELETE, "/api/todos/12345", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Todo not found");
}

#[tokio::test]
#[serial]
async fn test_create_and_list_todos_newest_first() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    let token = signup_and_login(&app, "Ann", "ann@example.com", "secret123").await;

    let first = create_todo(&app, &token, json!({ "title": "Buy milk" })).await;
    assert_eq!(first["title"], "Buy milk");
    assert_eq!(first["completed"], false);
    Uuid::parse_str(first["id"].as_str().unwrap()).expect("todo id was not a UUID");

    let second = create_todo(
        &app,
        &token,
        json!({ "title": "Walk dog", "completed": true }),
    )
    .await;
    assert_eq!(second["completed"], true);

    let (status, body) = send_json(&app, Method::GET, "/api/todos", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    let todos = body["todos"].as_array().expect("todos was not an array");
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["title"], "Walk dog");
    assert_eq!(todos[1]["title"], "Buy milk");
}

#[tokio::test]
#[serial]
async fn test_todos_are_scoped_to_their_owner() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    let ann = signup_and_login(&app, "Ann", "ann@example.com", "secret123").await;
    let bob = signup_and_login(&app, "Bob", "bob@example.com", "secret123").await;

    create_todo(&app, &ann, json!({ "title": "Ann's first" })).await;
    create_todo(&app, &ann, json!({ "title": "Ann's second" })).await;
    create_todo(&app, &bob, json!({ "title": "Bob's only" })).await;

    let (_, ann_list) = send_json(&app, Method::GET, "/api/todos", Some(&ann), None).await;
    let (_, bob_list) = send_json(&app, Method::GET, "/api/todos", Some(&bob), None).await;

    assert_eq!(ann_list["count"], 2);
    assert_eq!(bob_list["count"], 1);
    assert_eq!(bob_list["todos"][0]["title"], "Bob's only");
}

#[tokio::test]
#[serial]
async fn test_update_todo_partially() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    let token = signup_and_login(&app, "Ann", "ann@example.com", "secret123").await;
    let id = todo_id(&create_todo(&app, &token, json!({ "title": "Buy milk" })).await);

    // Only `completed`: the title must survive.
    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/todos/{id}"),
        Some(&token),
        Some(json!({ "completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo updated successfully");
    assert_eq!(body["todo"]["title"], "Buy milk");
    assert_eq!(body["todo"]["completed"], true);

    // Only `title`: the completed flag must survive.
    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/todos/{id}"),
        Some(&token),
        Some(json!({ "title": "Buy oat milk" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todo"]["title"], "Buy oat milk");
    assert_eq!(body["todo"]["completed"], true);
}

#[tokio::test]
#[serial]
async fn test_update_todo_with_empty_body_changes_nothing() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    let token = signup_and_login(&app, "Ann", "ann@example.com", "secret123").await;
    let id = todo_id(&create_todo(&app, &token, json!({ "title": "Buy milk" })).await);

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/todos/{id}"),
        Some(&token),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todo"]["title"], "Buy milk");
    assert_eq!(body["todo"]["completed"], false);
}

#[tokio::test]
#[serial]
async fn test_update_someone_elses_todo_is_denied() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    let ann = signup_and_login(&app, "Ann", "ann@example.com", "secret123").await;
    let bob = signup_and_login(&app, "Bob", "bob@example.com", "secret123").await;
    let id = todo_id(&create_todo(&app, &ann, json!({ "title": "Ann's plan" })).await);

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/todos/{id}"),
        Some(&bob),
        Some(json!({ "title": "Bob's takeover" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Access denied. You can only update your own todos"
    );
    assert_eq!(body["status"], 403);

    // And nothing changed for the owner.
    let (_, ann_list) = send_json(&app, Method::GET, "/api/todos", Some(&ann), None).await;
    assert_eq!(ann_list["todos"][0]["title"], "Ann's plan");
}

#[tokio::test]
#[serial]
async fn test_update_missing_todo_is_not_found() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    let token = signup_and_login(&app, "Ann", "ann@example.com", "secret123").await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/todos/{}", Uuid::new_v4()),
        Some(&token),
        Some(json!({ "completed": true })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Todo not found");
}

#[tokio::test]
#[serial]
async fn test_delete_todo() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    let token = signup_and_login(&app, "Ann", "ann@example.com", "secret123").await;
    let id = todo_id(&create_todo(&app, &token, json!({ "title": "Buy milk" })).await);

    let (status, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/todos/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo deleted successfully");

    let (_, list) = send_json(&app, Method::GET, "/api/todos", Some(&token), None).await;
    assert_eq!(list["count"], 0);
}

#[tokio::test]
#[serial]
async fn test_delete_someone_elses_todo_is_denied() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    let ann = signup_and_login(&app, "Ann", "ann@example.com", "secret123").await;
    let bob = signup_and_login(&app, "Bob", "bob@example.com", "secret123").await;
    let id = todo_id(&create_todo(&app, &ann, json!({ "title": "Ann's plan" })).await);

    let (status, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/todos/{id}"),
        Some(&bob),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Access denied. You can only delete your own todos"
    );

    let (_, ann_list) = send_json(&app, Method::GET, "/api/todos", Some(&ann), None).await;
    assert_eq!(ann_list["count"], 1);
}

#[tokio::test]
#[serial]
async fn test_delete_missing_todo_is_not_found() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    let token = signup_and_login(&app, "Ann", "ann@example.com", "secret123").await;

    let (status, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/todos/{}", Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Todo not found");
}
