//! Bearer-token extractor guarding protected routes.

use crate::api::error::ApiError;
use crate::state::AppState;

use kino_auth::Claims;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// Claims of the authenticated caller.
///
/// A handler taking `AuthUser` rejects the request before its body runs:
/// 401 UNAUTHENTICATED when the Authorization header is absent or not a
/// Bearer scheme, 401 INVALID_TOKEN when the token fails verification.
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthenticated)?;

        let claims = state
            .jwt_validator
            .validate(token)
            .map_err(|_| ApiError::InvalidToken)?;

        Ok(AuthUser(claims))
    }
}
