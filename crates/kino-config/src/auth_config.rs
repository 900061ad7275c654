use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Token signing configuration. The secret has no default and is refused
/// when shorter than 32 bytes.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
}

const MIN_SECRET_BYTES: usize = 32;

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => Err(ConfigError::auth(
                "auth.jwt_secret is required (set JWT_SECRET)",
            )),
            Some(secret) if secret.len() < MIN_SECRET_BYTES => Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {MIN_SECRET_BYTES} bytes, got {}",
                secret.len()
            ))),
            Some(_) => Ok(()),
        }
    }
}
