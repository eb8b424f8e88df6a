mod common;

use axum_test::TestServer;
use common::{create_test_app, create_test_app_state};
use http::StatusCode;
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;
use userdir::models::AppState;

fn reset_database(state: &Arc<AppState>) {
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::run_test_migrations(&mut conn);
    common::cleanup_test_db(&mut conn);
}

#[tokio::test]
async fn hello_returns_greeting() {
    let app = create_test_app(create_test_app_state());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/hello").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "message": "Hello, world!" }));
}

#[tokio::test]
async fn empty_body_reports_every_violated_rule() {
    // Validation failures never touch the database.
    let app = create_test_app(create_test_app_state());
    let server = TestServer::new(app).unwrap();

    let response = server.post("/api/v1/users").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let messages = body["messages"].as_array().expect("messages array");
    let contains = |needle: &str| messages.iter().any(|m| m == needle);
    assert!(contains("Parameter \"username\" is required."));
    assert!(contains(
        "Parameter \"username\" length must be between 1 and 16 characters."
    ));
    assert!(contains("Parameter \"displayName\" is required."));
    assert!(contains(
        "Parameter \"displayName\" length must be between 1 and 16 characters."
    ));
    assert!(contains("Parameter \"birthDate\" is required."));
}

#[tokio::test]
async fn future_birth_date_is_rejected() {
    let app = create_test_app(create_test_app_state());
    let server = TestServer::new(app).unwrap();

    let tomorrow = (chrono::Utc::now() + chrono::Duration::days(1))
        .date_naive()
        .to_string();
    let response = server
        .post("/api/v1/users")
        .json(&json!({
            "username": "jdoe",
            "displayName": "John Doe",
            "birthDate": tomorrow
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["messages"]
        .as_array()
        .expect("messages array")
        .iter()
        .any(|m| m == "Parameter \"birthDate\" cannot be greater than current date."));
}

#[tokio::test]
async fn overlong_search_is_rejected() {
    let app = create_test_app(create_test_app_state());
    let server = TestServer::new(app).unwrap();

    let search = "x".repeat(256);
    let response = server
        .get("/api/v1/users")
        .add_query_param("search", search)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["messages"]
        .as_array()
        .expect("messages array")
        .iter()
        .any(|m| m == "Query parameter \"search\" length must be between 1 and 255 characters."));
}

#[tokio::test]
async fn database_failure_never_leaks_detail() {
    // A pool that cannot connect stands in for any infrastructure failure.
    let state = Arc::new(AppState {
        db: common::create_broken_db_pool(),
    });
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .post("/api/v1/users")
        .json(&json!({
            "username": "jdoe",
            "displayName": "John Doe",
            "birthDate": "1991-12-16"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Unknown error." }));

    let response = server.get("/api/v1/users").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Unknown error." }));
}

#[tokio::test]
#[serial]
async fn create_user_roundtrip() {
    let state = create_test_app_state();
    reset_database(&state);
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .post("/api/v1/users")
        .json(&json!({
            "username": "jdoe",
            "displayName": "John Doe",
            "bio": "Lorem ipsum dolor sit amet.",
            "birthDate": "1991-12-16"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["id"].is_i64());
    assert_eq!(body["username"], "jdoe");
    assert_eq!(body["displayName"], "John Doe");
    assert_eq!(body["bio"], "Lorem ipsum dolor sit amet.");
    assert_eq!(body["birthDate"], "1991-12-16");
    assert_eq!(body["status"], true);
    assert!(body["createDate"].is_string());
    assert!(body["lastUpdated"].is_string());
}

#[tokio::test]
#[serial]
async fn bio_defaults_to_empty_string() {
    let state = create_test_app_state();
    reset_database(&state);
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .post("/api/v1/users")
        .json(&json!({
            "username": "nobio",
            "displayName": "No Bio",
            "birthDate": "1991-12-16"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["bio"], "");
}

#[tokio::test]
#[serial]
async fn duplicate_username_conflicts() {
    let state = create_test_app_state();
    reset_database(&state);
    let server = TestServer::new(create_test_app(state)).unwrap();

    let payload = json!({
        "username": "jdoe",
        "displayName": "John Doe",
        "birthDate": "1991-12-16"
    });

    server
        .post("/api/v1/users")
        .json(&payload)
        .await
        .assert_status(StatusCode::OK);

    let response = server.post("/api/v1/users").json(&payload).await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({ "message": "Username is already taken." }));
}

#[tokio::test]
#[serial]
async fn list_and_search_users() {
    let state = create_test_app_state();
    reset_database(&state);
    let server = TestServer::new(create_test_app(state)).unwrap();

    for (username, display_name, bio) in [
        ("user1", "User number 1", "I'm number 1!"),
        ("user2", "User number 2", "I'm number 2!"),
        ("someone", "Else entirely", ""),
    ] {
        server
            .post("/api/v1/users")
            .json(&json!({
                "username": username,
                "displayName": display_name,
                "bio": bio,
                "birthDate": "1991-12-16"
            }))
            .await
            .assert_status(StatusCode::OK);
    }

    // No query: every row comes back.
    let response = server.get("/api/v1/users").await;
    response.assert_status(StatusCode::OK);
    let all: serde_json::Value = response.json();
    assert_eq!(all.as_array().expect("array").len(), 3);

    // Exact substring of one username.
    let response = server
        .get("/api/v1/users")
        .add_query_param("search", "user1")
        .await;
    response.assert_status(StatusCode::OK);
    let matched: serde_json::Value = response.json();
    let matched = matched.as_array().expect("array");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0]["username"], "user1");

    // Substring matching either username or display name.
    let response = server
        .get("/api/v1/users")
        .add_query_param("search", "number")
        .await;
    response.assert_status(StatusCode::OK);
    let matched: serde_json::Value = response.json();
    assert_eq!(matched.as_array().expect("array").len(), 2);

    // Case-insensitive under the table collation.
    let response = server
        .get("/api/v1/users")
        .add_query_param("search", "USER1")
        .await;
    response.assert_status(StatusCode::OK);
    let matched: serde_json::Value = response.json();
    assert_eq!(matched.as_array().expect("array").len(), 1);

    // No match at all.
    let response = server
        .get("/api/v1/users")
        .add_query_param("search", "missing")
        .await;
    response.assert_status(StatusCode::OK);
    let matched: serde_json::Value = response.json();
    assert_eq!(matched.as_array().expect("array").len(), 0);
}

#[tokio::test]
#[serial]
async fn health_reports_database_state() {
    let state = create_test_app_state();
    reset_database(&state);
    let server = TestServer::new(create_test_app(state)).unwrap();

    server.get("/api/health").await.assert_status(StatusCode::OK);

    let broken = Arc::new(AppState {
        db: common::create_broken_db_pool(),
    });
    let server = TestServer::new(create_test_app(broken)).unwrap();
    server
        .get("/api/health")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
