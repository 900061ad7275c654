use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, OAuthConfig,
    ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub oauth: OAuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for KINO_CONFIG_DIR env var, else use ./.kino/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: KINO_CONFIG_DIR env var > ./.kino/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("KINO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".kino"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.oauth.validate()?;

        if self.database.url.is_empty() {
            return Err(ConfigError::database("database.url must not be empty"));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        if self.server.allowed_origins.is_empty() {
            info!("  cors: any origin");
        } else {
            info!("  cors: {}", self.server.allowed_origins.join(", "));
        }

        info!("  database: {}", self.database.url);

        info!(
            "  auth: jwt secret {}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "MISSING"
            }
        );

        info!(
            "  oauth: {} (frontend: {})",
            if self.oauth.is_configured() {
                "configured"
            } else {
                "not configured"
            },
            self.oauth.frontend_url
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("KINO_HOST", &mut self.server.host);
        Self::apply_env_parse("PORT", &mut self.server.port);
        if let Ok(origins) = std::env::var("KINO_ALLOWED_ORIGINS") {
            self.server.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        // Database
        Self::apply_env_string("DATABASE_URL", &mut self.database.url);

        // Auth
        Self::apply_env_option_string("JWT_SECRET", &mut self.auth.jwt_secret);

        // OAuth provider
        Self::apply_env_option_string("OAUTH_CLIENT_ID", &mut self.oauth.client_id);
        Self::apply_env_option_string("OAUTH_CLIENT_SECRET", &mut self.oauth.client_secret);
        Self::apply_env_option_string("OAUTH_CALLBACK_URL", &mut self.oauth.callback_url);
        Self::apply_env_string("FRONTEND_URL", &mut self.oauth.frontend_url);
        Self::apply_env_string("OAUTH_AUTH_URL", &mut self.oauth.auth_url);
        Self::apply_env_string("OAUTH_TOKEN_URL", &mut self.oauth.token_url);
        Self::apply_env_string("OAUTH_USERINFO_URL", &mut self.oauth.userinfo_url);
        Self::apply_env_parse("OAUTH_TIMEOUT_SECS", &mut self.oauth.timeout_secs);

        // Logging
        Self::apply_env_parse("KINO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KINO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KINO_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
