use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

// ========================= Contact Submission =========================
/// Validated body of `POST /contact/submit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactSubmissionError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactSubmissionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactSubmissionError::EmptyName);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(ContactSubmissionError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(ContactSubmissionError::InvalidEmailFormat);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(ContactSubmissionError::EmptyMessage);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// ========================= Inbox =========================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Caller-supplied part of a `ContactMessage`; the inbox fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl From<&ContactSubmission> for NewContactMessage {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            subject: None,
            message: submission.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_trims_fields() {
        let submission = ContactSubmission::new("  Ann ", " ann@example.com ", " Hello ").unwrap();

        assert_eq!(submission.name(), "Ann");
        assert_eq!(submission.email(), "ann@example.com");
        assert_eq!(submission.message(), "Hello");
    }

    #[test]
    fn test_submission_rejects_blank_name() {
        let result = ContactSubmission::new("   ", "ann@example.com", "Hi");
        assert_eq!(result, Err(ContactSubmissionError::EmptyName));
    }

    #[test]
    fn test_submission_rejects_bad_email() {
        assert_eq!(
            ContactSubmission::new("Ann", "", "Hi"),
            Err(ContactSubmissionError::EmptyEmail)
        );
        assert_eq!(
            ContactSubmission::new("Ann", "not-an-email", "Hi"),
            Err(ContactSubmissionError::InvalidEmailFormat)
        );
    }

    #[test]
    fn test_submission_rejects_blank_message() {
        let result = ContactSubmission::new("Ann", "ann@example.com", "\n ");
        assert_eq!(result, Err(ContactSubmissionError::EmptyMessage));
    }

    #[test]
    fn test_submission_serializes_three_fields() {
        let submission = ContactSubmission::new("Ann", "ann@example.com", "Hi").unwrap();

        let value = serde_json::to_value(&submission).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "name": "Ann", "email": "ann@example.com", "message": "Hi" })
        );
    }

    #[test]
    fn test_contact_message_wire_names() {
        let message = ContactMessage {
            id: "m1".into(),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            subject: None,
            message: "Hi".into(),
            created_at: Utc::now(),
            read: false,
        };

        let value = serde_json::to_value(&message).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("subject").is_none());
    }
}
