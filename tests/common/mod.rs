#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use trivia_api::config::DEFAULT_BODY_LIMIT_BYTES;
use trivia_api::{app, AppState, MemoryStore, NewQuestion, TriviaStore};

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Seeded categories (1..=6) and `count` questions "Question 1".."Question N",
/// spread round-robin over the categories.
pub async fn store_with_questions(count: usize) -> MemoryStore {
    let store = MemoryStore::seeded();
    for i in 0..count {
        store
            .insert_question(&NewQuestion {
                question: format!("Question {}", i + 1),
                answer: format!("Answer {}", i + 1),
                category: (i % 6) as i64 + 1,
                difficulty: (i % 5) as i64 + 1,
            })
            .await
            .expect("insert question");
    }
    store
}

pub fn router(store: impl TriviaStore + 'static) -> Router {
    app(AppState::new(store), DEFAULT_BODY_LIMIT_BYTES)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut req = Request::builder().method(method).uri(uri);
    if body.is_some() {
        req = req.header("content-type", "application/json");
    }
    let req = req
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .expect("request build should succeed");
    let resp = app.clone().oneshot(req).await.expect("router should respond");
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    TestResponse {
        status,
        headers,
        json,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// Assert the failure envelope and return its message.
pub fn assert_error(resp: &TestResponse, status: StatusCode) -> String {
    assert_eq!(resp.status, status, "unexpected status, body: {}", resp.json);
    assert_eq!(resp.json["success"], false);
    assert_eq!(resp.json["error"], status.as_u16());
    resp.json["message"]
        .as_str()
        .expect("message should be a string")
        .to_string()
}

pub fn question_ids(resp: &TestResponse) -> Vec<i64> {
    resp.json["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question id"))
        .collect()
}
