use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::contact::application::domain::entities::{ContactMessage, NewContactMessage};

/// Admin-side list of received messages, newest last.
///
/// Entries are only ever appended; the `read` flag is the one mutable field.
#[derive(Debug, Default)]
pub struct ContactInbox {
    messages: RwLock<Vec<ContactMessage>>,
}

impl ContactInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&self, message: NewContactMessage) -> ContactMessage {
        let entry = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: message.name,
            email: message.email,
            subject: message.subject,
            message: message.message,
            created_at: Utc::now(),
            read: false,
        };

        self.messages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        entry
    }

    /// Returns false when no message has `id`.
    pub fn mark_as_read(&self, id: &str) -> bool {
        let mut messages = self.messages.write().unwrap_or_else(PoisonError::into_inner);
        match messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.read = true;
                true
            }
            None => {
                debug!("No inbox message with id {}", id);
                false
            }
        }
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn unread_count(&self) -> usize {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|m| !m.read)
            .count()
    }
}
