//! Federated login endpoints.

use crate::api::error::{ApiError, Result as ApiErrorResult};
use crate::api::oauth::{AuthorizeUrlResponse, CallbackQuery};
use crate::oauth::{CallbackOutcome, handle_callback};
use crate::state::AppState;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use rand::Rng;
use rand::distr::Alphanumeric;

/// GET /auth/federated/url
///
/// Hands the front end the provider authorize URL to navigate to.
pub async fn federated_url(
    State(state): State<AppState>,
) -> ApiErrorResult<Json<AuthorizeUrlResponse>> {
    if !state.oauth.is_configured() {
        return Err(ApiError::ProviderNotConfigured {
            has_client_id: state.oauth.client_id.is_some(),
            has_client_secret: state.oauth.client_secret.is_some(),
            has_callback_url: state.oauth.callback_url.is_some(),
        });
    }

    let client_id = state.oauth.client_id.as_deref().unwrap_or_default();
    let callback_url = state.oauth.callback_url.as_deref().unwrap_or_default();

    let csrf_state: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();

    let url = format!(
        "{}?response_type=code&client_id={}&redirect_uri={}&state={}",
        state.oauth.auth_url,
        urlencoding::encode(client_id),
        urlencoding::encode(callback_url),
        csrf_state,
    );

    Ok(Json(AuthorizeUrlResponse { url }))
}

/// GET /auth/federated/callback
///
/// The provider sends the browser here. Whatever happens, the user ends
/// up back on the front end: success lands on /auth-callback with the
/// token in the query string, failure lands on / with an error code.
pub async fn federated_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    // Anti-replay state is carried through the dance but not verified:
    // there is no server-side session to bind it to
    if let Some(csrf_state) = &query.state {
        log::debug!("Callback state: {csrf_state}");
    }

    let outcome = handle_callback(&state, query.code, query.error, query.error_description).await;

    let frontend = state.oauth.frontend_url.trim_end_matches('/');

    match outcome {
        CallbackOutcome::Success { token, identity } => {
            let mut url = format!(
                "{}/auth-callback?token={}&provider={}",
                frontend,
                urlencoding::encode(&token),
                urlencoding::encode(identity.provider.as_str()),
            );
            if let Some(email) = &identity.email {
                url.push_str("&email=");
                url.push_str(&urlencoding::encode(email));
            }
            if let Some(name) = &identity.display_name {
                url.push_str("&displayName=");
                url.push_str(&urlencoding::encode(name));
            }
            if let Some(avatar) = &identity.avatar_url {
                url.push_str("&avatar=");
                url.push_str(&urlencoding::encode(avatar));
            }
            redirect_found(&url)
        }
        CallbackOutcome::Failure { code, message } => {
            let mut url = format!("{frontend}/?error={code}");
            if let Some(message) = message {
                url.push_str("&message=");
                url.push_str(&urlencoding::encode(&message));
            }
            redirect_found(&url)
        }
    }
}

/// Plain 302; the browser follows it with a GET either way
fn redirect_found(url: &str) -> Response {
    match url.parse::<axum::http::HeaderValue>() {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        // Unrepresentable URL means misconfigured frontend_url
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
