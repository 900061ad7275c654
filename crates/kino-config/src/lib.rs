mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod oauth_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use oauth_config::OAuthConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://kino.db?mode=rwc";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_OAUTH_AUTH_URL: &str = "https://oauth.yandex.ru/authorize";
const DEFAULT_OAUTH_TOKEN_URL: &str = "https://oauth.yandex.ru/token";
const DEFAULT_OAUTH_USERINFO_URL: &str = "https://login.yandex.ru/info";
const DEFAULT_AVATAR_URL_TEMPLATE: &str =
    "https://avatars.yandex.net/get-yapic/{avatar_id}/islands-200";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

#[cfg(test)]
mod tests;
