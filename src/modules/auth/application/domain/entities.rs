use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Where the session is in its lifecycle.
///
/// ```text
/// Uninitialized -> Verifying -> Authenticated | Anonymous
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Uninitialized,
    Verifying,
    Authenticated,
    Anonymous,
}

/// `data` of a successful `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub user: User,
    pub token: String,
}

/// `data` of a successful `GET /auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPayload {
    pub user: User,
}

// ========================= Login Request =========================
/// Validated login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, LoginRequestError> {
        let email = Self::validate_email(email)?;
        let password = Self::validate_password(password)?;

        Ok(Self { email, password })
    }

    /// Trimmed, case preserved
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: &str) -> Result<String, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(email.to_string())
    }

    fn validate_password(password: &str) -> Result<String, LoginRequestError> {
        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(password.to_string())
    }
}
