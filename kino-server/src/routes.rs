use crate::api::error::ApiError;
use crate::api::{auth, bookings, oauth};
use crate::health::health;
use crate::state::AppState;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/check", get(auth::check_auth))
        .route("/auth/federated/url", get(oauth::federated_url))
        .route("/auth/federated/callback", get(oauth::federated_callback))
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// Open CORS when no origins are configured, locked down otherwise
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

async fn not_found() -> impl IntoResponse {
    ApiError::NotFound
}
