//! Demo login fallback for environments without a live backend.
//!
//! Only active when configuration hands a `DemoCredentials` to the session.
//! Never enabled in production (see `ClientConfig::from_lookup`).

use chrono::Utc;

use super::entities::User;

pub const DEMO_TOKEN_PREFIX: &str = "demo-token-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: "admin@portfolio.com".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl DemoCredentials {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim()) && self.password == password
    }

    pub fn user(&self) -> User {
        User {
            id: "1".to_string(),
            email: self.email.clone(),
            name: "John Doe".to_string(),
        }
    }
}

/// `demo-token-<unix millis>`
pub fn demo_token() -> String {
    format!("{}{}", DEMO_TOKEN_PREFIX, Utc::now().timestamp_millis())
}

pub fn is_demo_token(token: &str) -> bool {
    token.starts_with(DEMO_TOKEN_PREFIX)
}
