//! HTTP client for the external OAuth provider.
//!
//! Two calls: exchange the authorization code for an access token, then
//! fetch the user profile with it. Endpoint URLs come from config so
//! tests point them at a local mock.

use kino_config::OAuthConfig;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Code exchange failed: {0}")]
    Exchange(#[source] reqwest::Error),

    #[error("Userinfo fetch failed: {0}")]
    UserInfo(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Profile as reported by the provider. Only `id` is guaranteed.
#[derive(Debug, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    pub default_email: Option<String>,
    pub display_name: Option<String>,
    pub login: Option<String>,
    pub real_name: Option<String>,
    pub default_avatar_id: Option<String>,
}

impl ProviderUser {
    /// Best available human-readable name.
    /// Empty strings from the provider count as absent.
    pub fn best_display_name(&self) -> String {
        [&self.display_name, &self.login, &self.real_name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or("Unknown")
            .to_string()
    }

    /// Avatar URL built from the configured template, if the provider
    /// reported an avatar id
    pub fn avatar_url(&self, template: &str) -> Option<String> {
        self.default_avatar_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| template.replace("{avatar_id}", id))
    }
}

pub struct ProviderClient<'a> {
    http: &'a reqwest::Client,
    config: &'a OAuthConfig,
}

impl<'a> ProviderClient<'a> {
    pub fn new(http: &'a reqwest::Client, config: &'a OAuthConfig) -> Self {
        Self { http, config }
    }

    /// Redeem the authorization code for an access token
    pub async fn exchange_code(&self, code: &str) -> Result<AccessTokenResponse, ProviderError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.config.client_id.as_deref().unwrap_or("")),
            (
                "client_secret",
                self.config.client_secret.as_deref().unwrap_or(""),
            ),
        ];

        self.http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ProviderError::Exchange)?
            .json::<AccessTokenResponse>()
            .await
            .map_err(ProviderError::Exchange)
    }

    /// Fetch the profile behind an access token
    pub async fn fetch_user(&self, access_token: &str) -> Result<ProviderUser, ProviderError> {
        self.http
            .get(&self.config.userinfo_url)
            .header("Authorization", format!("OAuth {access_token}"))
            .query(&[("format", "json")])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ProviderError::UserInfo)?
            .json::<ProviderUser>()
            .await
            .map_err(ProviderError::UserInfo)
    }
}
