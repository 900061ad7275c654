use crate::{AuthConfig, Config, OAuthConfig, ServerConfig};

fn config_with_secret() -> Config {
    Config {
        auth: AuthConfig {
            jwt_secret: Some("0123456789abcdef0123456789abcdef".to_string()),
        },
        ..Config::default()
    }
}

#[test]
fn default_config_fails_validation_without_secret() {
    let config = Config::default();
    assert!(config.validate().is_err());
}

#[test]
fn config_with_secret_validates() {
    let config = config_with_secret();
    config.validate().expect("config should validate");
}

#[test]
fn short_secret_is_rejected() {
    let mut config = config_with_secret();
    config.auth.jwt_secret = Some("too-short".to_string());
    assert!(config.validate().is_err());
}

#[test]
fn oauth_defaults_are_not_configured() {
    let oauth = OAuthConfig::default();
    assert!(!oauth.is_configured());
    oauth.validate().expect("unconfigured oauth is allowed");
}

#[test]
fn oauth_client_id_without_secret_is_rejected() {
    let mut config = config_with_secret();
    config.oauth.client_id = Some("client".to_string());
    config.oauth.callback_url = Some("https://api.example.com/callback".to_string());
    assert!(config.validate().is_err());

    config.oauth.client_secret = Some("secret".to_string());
    config.validate().expect("fully configured oauth validates");
    assert!(config.oauth.is_configured());
}

#[test]
fn invalid_origin_is_rejected() {
    let mut config = config_with_secret();
    config.server = ServerConfig {
        allowed_origins: vec!["example.com".to_string()],
        ..ServerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn log_level_parses_known_names_and_falls_back_on_garbage() {
    use crate::LogLevel;

    let level: LogLevel = "WARN".parse().unwrap();
    assert_eq!(*level, log::LevelFilter::Warn);

    let level: LogLevel = " trace ".parse().unwrap();
    assert_eq!(*level, log::LevelFilter::Trace);

    let level: LogLevel = "nonsense".parse().unwrap();
    assert_eq!(*level, log::LevelFilter::Info);
}

#[test]
fn bind_addr_joins_host_and_port() {
    let config = Config::default();
    assert_eq!(config.bind_addr(), "127.0.0.1:5000");
}
