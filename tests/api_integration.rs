//! Integration tests for API endpoints.
//!
//! These tests drive the full router against an in-memory event store, from
//! the first answer through completion and chart aggregation.

use axum_test::TestServer;
use serde_json::{json, Value};

use melomood::config::AppConfig;
use melomood::server::{create_router, AppState, BoxedStore};
use melomood::storage::MemoryEventStore;

/// Create a test server backed by an in-memory event store
fn create_test_server() -> TestServer {
    let config = AppConfig::default();
    let store: BoxedStore = Box::new(MemoryEventStore::new());
    let state = AppState::new(config, store);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

/// Submit one answer for a user and return the session state
async fn submit(server: &TestServer, user: &str, answer: &str) -> Value {
    let response = server
        .post(&format!("/api/v1/users/{user}/quiz/answer"))
        .json(&json!({ "answer": answer }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

async fn mood_data(server: &TestServer, user: &str) -> Value {
    let response = server.get(&format!("/api/v1/users/{user}/mood-data")).await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_config_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/config").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["quiz"]["question_count"], 15);
    assert_eq!(body["server"]["port"], 5000);
}

#[tokio::test]
async fn test_questions_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/quiz/questions").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["count"], 15);

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions[0]["id"], "physical");
    assert_eq!(questions[7]["id"], "stress");
    assert_eq!(questions[7]["options"].as_array().unwrap().len(), 10);
    assert_eq!(questions[14]["id"], "gratitude");
}

#[tokio::test]
async fn test_moods_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/moods").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["count"], 7);

    let moods = body["moods"].as_array().unwrap();
    assert_eq!(moods[0]["mood"], "excited");
    assert_eq!(moods[6]["mood"], "hopeless");
    assert!(moods[0]["playlist_url"]
        .as_str()
        .unwrap()
        .starts_with("https://"));
}

#[tokio::test]
async fn test_fresh_session_state() {
    let server = create_test_server();

    let response = server.get("/api/v1/users/ada@example.com/quiz").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["cursor"], 0);
    assert_eq!(body["total"], 15);
    assert_eq!(body["completed"], false);
    assert_eq!(body["question"]["id"], "physical");
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn test_full_quiz_walk_records_mood() {
    let server = create_test_server();
    let user = "ada@example.com";

    let mut state = Value::Null;
    for i in 0..15 {
        state = submit(&server, user, "Energetic").await;
        if i < 14 {
            assert_eq!(state["cursor"], i + 1);
            assert_eq!(state["completed"], false);
        }
    }

    assert_eq!(state["completed"], true);
    assert_eq!(state["cursor"], 15);
    assert_eq!(state["result"]["mood"], "excited");
    assert_eq!(state["result"]["score"], 30);
    assert_eq!(state["result"]["meme"], "/static/excited.svg");

    let trends = mood_data(&server, user).await;
    assert_eq!(trends["weekly"]["excited"], 1);
    assert_eq!(trends["monthly"]["excited"], 1);
    assert_eq!(trends["yearly"]["excited"], 1);
}

#[tokio::test]
async fn test_double_submit_after_completion_is_a_noop() {
    let server = create_test_server();
    let user = "u";

    for _ in 0..15 {
        submit(&server, user, "Energetic").await;
    }

    // Submitting again must not change the result or log a second event.
    let state = submit(&server, user, "Heartbroken").await;
    assert_eq!(state["completed"], true);
    assert_eq!(state["result"]["score"], 30);
    assert_eq!(state["result"]["mood"], "excited");

    let trends = mood_data(&server, user).await;
    assert_eq!(trends["weekly"]["excited"], 1);
    assert!(trends["weekly"].get("anxious").is_none());
}

#[tokio::test]
async fn test_unknown_answers_are_accepted() {
    let server = create_test_server();

    let state = submit(&server, "u", "definitely not an option").await;
    assert_eq!(state["cursor"], 1);
    assert_eq!(state["completed"], false);

    // A missing answer field scores zero rather than failing.
    let response = server
        .post("/api/v1/users/u/quiz/answer")
        .json(&json!({}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["cursor"], 2);
}

#[tokio::test]
async fn test_reset_starts_fresh_but_keeps_history() {
    let server = create_test_server();
    let user = "u";

    for _ in 0..15 {
        submit(&server, user, "Energetic").await;
    }

    let response = server
        .post(&format!("/api/v1/users/{user}/quiz/reset"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["reset"], true);

    let state = server
        .get(&format!("/api/v1/users/{user}/quiz"))
        .await
        .json::<Value>();
    assert_eq!(state["cursor"], 0);
    assert_eq!(state["completed"], false);

    // The recorded event survives the reset.
    let trends = mood_data(&server, user).await;
    assert_eq!(trends["weekly"]["excited"], 1);
}

#[tokio::test]
async fn test_second_attempt_accumulates_events() {
    let server = create_test_server();
    let user = "u";

    for _ in 0..15 {
        submit(&server, user, "Energetic").await;
    }
    server
        .post(&format!("/api/v1/users/{user}/quiz/reset"))
        .await
        .assert_status_ok();
    for _ in 0..15 {
        submit(&server, user, "Heartbroken").await;
    }

    let trends = mood_data(&server, user).await;
    assert_eq!(trends["weekly"]["excited"], 1);
    assert_eq!(trends["weekly"]["hopeless"], 1);
}

#[tokio::test]
async fn test_mood_data_for_unknown_user_is_empty() {
    let server = create_test_server();

    let trends = mood_data(&server, "nobody@example.com").await;
    assert_eq!(trends["weekly"], json!({}));
    assert_eq!(trends["monthly"], json!({}));
    assert_eq!(trends["yearly"], json!({}));
}

#[tokio::test]
async fn test_users_are_isolated() {
    let server = create_test_server();

    for _ in 0..15 {
        submit(&server, "u1", "Energetic").await;
    }

    let state = server.get("/api/v1/users/u2/quiz").await.json::<Value>();
    assert_eq!(state["cursor"], 0);

    let trends = mood_data(&server, "u2").await;
    assert_eq!(trends["weekly"], json!({}));
}
