use crate::error::Result as ServerErrorResult;

use kino_auth::{JwtIssuer, JwtValidator};
use kino_config::{Config, OAuthConfig};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared application state handed to every handler.
///
/// Cheap to clone: the pool and reqwest client are internally
/// reference-counted, the JWT machinery sits behind Arcs.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub oauth: OAuthConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        // validate() guarantees the secret is present and long enough
        let secret = config.auth.jwt_secret.as_deref().unwrap_or_default();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.oauth.timeout_secs))
            .build()?;

        Ok(Self {
            pool,
            jwt_issuer: Arc::new(JwtIssuer::new(secret.as_bytes())),
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret.as_bytes())),
            oauth: config.oauth.clone(),
            http,
        })
    }
}
