//! Local (email + password) authentication handlers.

use crate::api::auth::{AuthResponse, CheckAuthResponse, LoginRequest, RegisterRequest, UserDto};
use crate::api::error::{ApiError, Result as ApiErrorResult};
use crate::state::AppState;

use kino_auth::{hash_password, verify_password};
use kino_core::Identity;
use kino_db::IdentityRepository;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use uuid::Uuid;

/// POST /auth/register
///
/// The pre-lookup gives a clean error for the common case; the unique
/// constraint remains the authority when two registrations race.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiErrorResult<Json<AuthResponse>> {
    let (email, password) = request.validate()?;

    let repo = IdentityRepository::new(state.pool.clone());

    if repo.find_by_email(&email).await?.is_some() {
        return Err(ApiError::DuplicateIdentity { field: "email" });
    }

    // bcrypt at cost 12 takes ~250ms; keep it off the async runtime
    let password = password.to_string();
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Hash task failed: {e}")))??;

    let identity = Identity::new_local(&email, hash);
    repo.create(&identity).await?;

    let token = state.jwt_issuer.issue(&identity)?;

    log::info!("Registered identity {}", identity.id);

    Ok(Json(AuthResponse {
        token,
        user: UserDto::from(&identity),
    }))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiErrorResult<Json<AuthResponse>> {
    let (email, password) = request.validate()?;

    let repo = IdentityRepository::new(state.pool.clone());

    // Unknown email and wrong password produce the same error
    let identity = repo
        .find_by_email(&email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let Some(hash) = identity.password_hash.clone() else {
        // Federated-only account, no password to check
        return Err(ApiError::InvalidCredentials);
    };

    let password = password.to_string();
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| ApiError::internal(format!("Verify task failed: {e}")))?;

    if !matches {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt_issuer.issue(&identity)?;

    log::info!("Login for identity {}", identity.id);

    Ok(Json(AuthResponse {
        token,
        user: UserDto::from(&identity),
    }))
}

/// GET /auth/check
///
/// Never fails: a missing, malformed, or expired token, an unknown
/// subject, even a store failure all yield `{"isAuthenticated": false}`
/// with a 200, so clients can poll it without special-casing errors.
pub async fn check_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<CheckAuthResponse> {
    let Some(token) = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
    else {
        return Json(CheckAuthResponse::anonymous());
    };

    let Ok(claims) = state.jwt_validator.validate(token) else {
        return Json(CheckAuthResponse::anonymous());
    };

    let Ok(user_id) = Uuid::parse_str(&claims.sub) else {
        return Json(CheckAuthResponse::anonymous());
    };

    // A valid token for a deleted account is still anonymous
    let repo = IdentityRepository::new(state.pool.clone());
    match repo.find_by_id(user_id).await {
        Ok(Some(identity)) => Json(CheckAuthResponse::authenticated(&identity)),
        Ok(None) => Json(CheckAuthResponse::anonymous()),
        Err(e) => {
            log::error!("{e}");
            Json(CheckAuthResponse::anonymous())
        }
    }
}
