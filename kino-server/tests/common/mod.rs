#![allow(dead_code)]

//! Shared fixtures for API integration tests.

use kino_config::Config;
use kino_server::{AppState, build_router};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub async fn create_test_pool() -> SqlitePool {
    // One connection: every pooled connection to :memory: is a separate db
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");
    kino_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_JWT_SECRET.to_string());
    config
}

pub async fn create_test_app() -> (Router, SqlitePool) {
    create_test_app_with_config(test_config()).await
}

pub async fn create_test_app_with_config(config: Config) -> (Router, SqlitePool) {
    let pool = create_test_pool().await;
    let state = AppState::new(pool.clone(), &config).expect("app state");
    (build_router(state, &[]), pool)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn authed_json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

/// Register an account through the API and return its bearer token
pub async fn register_user(app: &Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({ "email": email, "password": password }),
        ))
        .await
        .expect("register response");
    assert!(response.status().is_success());

    let body = response_json(response).await;
    body["token"].as_str().expect("token").to_string()
}
