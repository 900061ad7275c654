use crate::{AuthError, Result as AuthErrorResult};

use kino_core::Identity;

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Bearer-token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Build claims for an identity, expiring `ttl_days` from now
    pub fn for_identity(identity: &Identity, ttl_days: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: identity.id.to_string(),
            email: identity.email.clone().unwrap_or_default(),
            provider: Some(identity.provider.as_str().to_string()),
            display_name: identity.display_name.clone(),
            exp: (now + Duration::days(ttl_days)).timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (identity id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
