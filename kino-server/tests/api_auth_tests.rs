//! Integration tests for local auth API handlers

mod common;

use common::{create_test_app, get_request, json_request, register_user, response_json};

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({ "email": "alice@example.com", "password": "hunter22" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(body["user"]["id"].is_string());
    // The hash must never appear in a response
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_normalizes_email_case() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({ "email": "  Alice@Example.COM ", "password": "hunter22" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_register_rejects_missing_fields() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({ "email": "   ", "password": "hunter22" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "email");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({ "email": "bob@example.com", "password": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["field"], "password");
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let (app, _pool) = create_test_app().await;
    register_user(&app, "alice@example.com", "hunter22").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({ "email": "ALICE@example.com", "password": "other-password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn test_login_round_trip() {
    let (app, _pool) = create_test_app().await;
    register_user(&app, "alice@example.com", "hunter22").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({ "email": "alice@example.com", "password": "hunter22" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_login_failure_is_uniform_for_unknown_email_and_wrong_password() {
    let (app, _pool) = create_test_app().await;
    register_user(&app, "alice@example.com", "hunter22").await;

    let wrong_password = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({ "email": "alice@example.com", "password": "not-it" }),
        ))
        .await
        .unwrap();
    let unknown_email = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({ "email": "nobody@example.com", "password": "hunter22" }),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);

    // Byte-identical bodies: no account-existence oracle
    let a = response_json(wrong_password).await;
    let b = response_json(unknown_email).await;
    assert_eq!(a, b);
    assert_eq!(a["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_check_auth_reports_authenticated_session() {
    let (app, _pool) = create_test_app().await;
    let token = register_user(&app, "alice@example.com", "hunter22").await;

    let response = app
        .clone()
        .oneshot(get_request("/auth/check", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["isAuthenticated"], true);
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["provider"], "local");
}

#[tokio::test]
async fn test_check_auth_is_ok_false_without_token() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/auth/check", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["isAuthenticated"], false);
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn test_check_auth_is_ok_false_for_garbage_token() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/auth/check", Some("not-a-jwt")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["isAuthenticated"], false);
}

#[tokio::test]
async fn test_check_auth_is_ok_false_for_expired_token() {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    use kino_auth::Claims;

    let (app, _pool) = create_test_app().await;

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: uuid::Uuid::new_v4().to_string(),
        email: "alice@example.com".to_string(),
        provider: Some("local".to_string()),
        display_name: None,
        exp: now - 3600,
        iat: now - 8 * 24 * 3600,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(common::TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app
        .clone()
        .oneshot(get_request("/auth/check", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["isAuthenticated"], false);
}

#[tokio::test]
async fn test_check_auth_is_ok_false_when_store_is_unavailable() {
    let (app, pool) = create_test_app().await;
    let token = register_user(&app, "alice@example.com", "hunter22").await;

    pool.close().await;

    let response = app
        .clone()
        .oneshot(get_request("/auth/check", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["isAuthenticated"], false);
}

#[tokio::test]
async fn test_protected_route_rejects_missing_and_invalid_tokens() {
    let (app, _pool) = create_test_app().await;

    let missing = app
        .clone()
        .oneshot(get_request("/bookings", None))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(missing).await;
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");

    let invalid = app
        .clone()
        .oneshot(get_request("/bookings", Some("garbage.token.here")))
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(invalid).await;
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_unknown_route_returns_structured_404() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/no/such/route", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health_endpoint_reports_ok() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_login_rejects_federated_only_account() {
    use kino_core::Identity;
    use kino_db::IdentityRepository;

    let (app, pool) = create_test_app().await;

    let identity = Identity::new_federated(
        "fed-900".to_string(),
        Some("fed@example.com".to_string()),
        Some("Fed".to_string()),
        None,
    );
    IdentityRepository::new(pool.clone())
        .create(&identity)
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({ "email": "fed@example.com", "password": "anything" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}
