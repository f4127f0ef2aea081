use std::env;
use std::path::PathBuf;
use std::time::Duration;

use email_address::EmailAddress;
use tracing::warn;

use crate::auth::application::domain::demo::DemoCredentials;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_CREDENTIALS_PATH: &str = ".portfolio_credentials.json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: String, value: String },

    #[error("{0} must not be empty")]
    Empty(String),

    #[error("Demo login must not be enabled in production")]
    DemoLoginInProduction,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub credentials_path: PathBuf,
    pub saved_notice_delay: Duration,
    /// `Some` only when the demo login fallback is switched on.
    pub demo_login: Option<DemoCredentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            saved_notice_delay: Duration::from_millis(3000),
            demo_login: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `.env.{RUST_ENV}` (or `.env`) and the process environment.
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match lookup("PORTFOLIO_API_URL") {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::Empty("PORTFOLIO_API_URL".to_string()))
            }
            Some(url) => url.trim().trim_end_matches('/').to_string(),
            None => defaults.api_base_url,
        };

        let request_timeout = match lookup("PORTFOLIO_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_positive("PORTFOLIO_REQUEST_TIMEOUT_SECS", &raw)?),
            None => defaults.request_timeout,
        };

        let credentials_path = lookup("PORTFOLIO_CREDENTIALS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.credentials_path);

        let saved_notice_delay = match lookup("PORTFOLIO_SAVED_NOTICE_MS") {
            Some(raw) => Duration::from_millis(parse_positive("PORTFOLIO_SAVED_NOTICE_MS", &raw)?),
            None => defaults.saved_notice_delay,
        };

        let demo_enabled = match lookup("PORTFOLIO_DEMO_LOGIN") {
            Some(raw) => parse_bool("PORTFOLIO_DEMO_LOGIN", &raw)?,
            None => false,
        };

        let demo_login = if demo_enabled {
            if lookup("RUST_ENV").as_deref() == Some("production") {
                return Err(ConfigError::DemoLoginInProduction);
            }

            let mut credentials = DemoCredentials::default();
            if let Some(email) = lookup("PORTFOLIO_DEMO_EMAIL") {
                let email = email.trim();
                if !EmailAddress::is_valid(email) {
                    return Err(ConfigError::InvalidValue {
                        key: "PORTFOLIO_DEMO_EMAIL".to_string(),
                        value: email.to_string(),
                    });
                }
                credentials.email = email.to_string();
            }
            if let Some(password) = lookup("PORTFOLIO_DEMO_PASSWORD") {
                credentials.password = password;
            }

            warn!(
                "⚠️  Demo login fallback is ENABLED for {}",
                credentials.email
            );
            Some(credentials)
        } else {
            None
        };

        Ok(Self {
            api_base_url,
            request_timeout,
            credentials_path,
            saved_notice_delay,
            demo_login,
        })
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
