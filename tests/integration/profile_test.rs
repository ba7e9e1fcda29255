//! Profile lookup integration tests
//!
//! GET /myprofile resolves a user by display name. Names are not unique,
//! so ties go to the earliest-registered user.

use axum::http::{Method, StatusCode};
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;

use crate::common::{lazy_app, send_json, signup_user, TestDatabase};
use tickbox::server::config::UserSchema;

#[tokio::test]
async fn test_profile_requires_name_parameter() {
    let app = lazy_app(UserSchema::Basic);

    let (status, body) = send_json(&app, Method::GET, "/myprofile", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name query parameter is required");

    // An empty value is as missing as no parameter at all.
    let (status, body) = send_json(&app, Method::GET, "/myprofile?name=", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name query parameter is required");
}

#[tokio::test]
#[serial]
async fn test_profile_unknown_name() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);

    let (status, body) = send_json(&app, Method::GET, "/myprofile?name=Nobody", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
#[serial]
async fn test_profile_returns_extended_fields() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Extended);
    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/signup",
        None,
        Some(json!({
            "name": "Ann",
            "email": "ann@example.com",
            "age": 30,
            "location": "Oslo",
            "password": "secret123"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, Method::GET, "/myprofile?name=Ann", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["email"], "ann@example.com");
    assert_eq!(body["age"], 30);
    assert_eq!(body["location"], "Oslo");
    let id = body["id"].as_str().expect("profile carried no id");
    Uuid::parse_str(id).expect("profile id was not a UUID");
}

#[tokio::test]
#[serial]
async fn test_profile_basic_schema_has_null_extras() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    signup_user(&app, "Ann", "ann@example.com", "secret123").await;

    let (status, body) = send_json(&app, Method::GET, "/myprofile?name=Ann", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ann@example.com");
    assert!(body["age"].is_null());
    assert!(body["location"].is_null());
}

#[tokio::test]
#[serial]
async fn test_profile_duplicate_names_resolve_to_earliest() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = db.app(UserSchema::Basic);
    signup_user(&app, "Ann", "first@example.com", "secret123").await;
    signup_user(&app, "Ann", "second@example.com", "secret123").await;

    let (status, body) = send_json(&app, Method::GET, "/myprofile?name=Ann", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "first@example.com");
}
