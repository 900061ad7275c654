//! Client-facing error surface.
//!
//! Every handler failure funnels through `ApiError`, which renders as
//! `{"error": {"code", "message", "field"?}}`. Internal details are
//! logged server-side and never leak into the response body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kino_auth::AuthError;
use kino_db::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<&'static str>,
    },

    #[error("Duplicate identity: {field} already exists")]
    DuplicateIdentity { field: &'static str },

    /// Deliberately indistinguishable between unknown email and wrong
    /// password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid or expired token")]
    InvalidToken,

    /// Carries which credentials are present so the operator can see
    /// what is missing without reading the deployment side by side.
    #[error("OAuth provider is not configured")]
    ProviderNotConfigured {
        has_client_id: bool,
        has_client_secret: bool,
        has_callback_url: bool,
    },

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn validation_field<S: Into<String>>(message: S, field: &'static str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field),
        }
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::DuplicateIdentity { .. } | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ProviderNotConfigured { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::DuplicateIdentity { .. } => "DUPLICATE_IDENTITY",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ProviderNotConfigured { .. } => "PROVIDER_NOT_CONFIGURED",
            Self::NotFound => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::DuplicateIdentity { field } => {
                format!("An account with this {field} already exists")
            }
            Self::InvalidCredentials => "Invalid email or password".to_string(),
            Self::Unauthenticated => "Authentication required".to_string(),
            Self::InvalidToken => "Invalid or expired token".to_string(),
            Self::ProviderNotConfigured { .. } => "OAuth provider is not configured".to_string(),
            Self::NotFound => "Not found".to_string(),
            // Internal details stay in the log
            Self::Internal { .. } => "Something went wrong".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{self}");
        } else {
            log::debug!("{self}");
        }

        let mut error = json!({
            "code": self.code(),
            "message": self.client_message(),
        });
        if let Self::Validation {
            field: Some(field), ..
        } = &self
        {
            error["field"] = json!(field);
        }
        if let Self::ProviderNotConfigured {
            has_client_id,
            has_client_secret,
            has_callback_url,
        } = &self
        {
            error["details"] = json!({
                "hasClientId": has_client_id,
                "hasClientSecret": has_client_secret,
                "hasCallbackUrl": has_callback_url,
            });
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Duplicate { field, .. } => Self::DuplicateIdentity { field },
            other => {
                log::error!("{other}");
                Self::internal("Database operation failed")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::TokenExpired { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidToken { .. }
            | AuthError::InvalidClaim { .. } => Self::InvalidToken,
            AuthError::MissingHeader { .. } | AuthError::InvalidScheme { .. } => {
                Self::Unauthenticated
            }
            other => {
                log::error!("{other}");
                Self::internal("Authentication operation failed")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
