use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AVATAR_URL_TEMPLATE, DEFAULT_FRONTEND_URL,
    DEFAULT_OAUTH_AUTH_URL, DEFAULT_OAUTH_TOKEN_URL, DEFAULT_OAUTH_USERINFO_URL,
    DEFAULT_PROVIDER_TIMEOUT_SECS,
};

use serde::Deserialize;

/// External OAuth provider configuration.
///
/// Client credentials have no defaults; a deployment without them still
/// starts, and the federated endpoints report the missing configuration as
/// a structured error instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Redirect URI registered with the provider
    pub callback_url: Option<String>,
    /// Front-end base URL that callback redirects land on
    pub frontend_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    /// `{avatar_id}` is substituted with the provider's avatar identifier
    pub avatar_url_template: String,
    /// Total budget for the token-exchange and userinfo calls
    pub timeout_secs: u64,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            callback_url: None,
            frontend_url: String::from(DEFAULT_FRONTEND_URL),
            auth_url: String::from(DEFAULT_OAUTH_AUTH_URL),
            token_url: String::from(DEFAULT_OAUTH_TOKEN_URL),
            userinfo_url: String::from(DEFAULT_OAUTH_USERINFO_URL),
            avatar_url_template: String::from(DEFAULT_AVATAR_URL_TEMPLATE),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl OAuthConfig {
    /// True when the authorize-URL endpoint can be served
    pub fn is_configured(&self) -> bool {
        self.client_id.is_some() && self.callback_url.is_some()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.frontend_url.is_empty() {
            return Err(ConfigError::oauth("oauth.frontend_url must not be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::oauth("oauth.timeout_secs must be positive"));
        }

        // Client id without a secret can build an authorize URL but can
        // never complete the code exchange; catch the misconfiguration at
        // startup rather than at the first callback.
        if self.is_configured() && self.client_secret.is_none() {
            return Err(ConfigError::oauth(
                "oauth.client_secret is required when oauth.client_id is set",
            ));
        }

        Ok(())
    }
}
