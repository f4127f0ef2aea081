// application/ports/outgoing/credential_store.rs
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

use crate::auth::application::domain::entities::User;

pub const USER_STORAGE_KEY: &str = "portfolio_user";
pub const TOKEN_STORAGE_KEY: &str = "portfolio_token";

#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialStoreError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Opaque string key/value store that survives restarts.
///
/// Values are JSON documents; the store itself does not interpret them.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CredentialStoreError>;
    fn set(&self, key: &str, value: String) -> Result<(), CredentialStoreError>;
    fn remove(&self, key: &str) -> Result<(), CredentialStoreError>;
}

/// Typed view over the two credential keys.
///
/// Storage failures are logged and read as "absent", never propagated.
pub struct CredentialBlob<'a> {
    store: &'a dyn CredentialStore,
}

impl<'a> CredentialBlob<'a> {
    pub fn new(store: &'a dyn CredentialStore) -> Self {
        Self { store }
    }

    pub fn user(&self) -> Option<User> {
        self.read_json(USER_STORAGE_KEY)
    }

    pub fn token(&self) -> Option<String> {
        self.read_json(TOKEN_STORAGE_KEY)
    }

    pub fn save(&self, user: &User, token: &str) {
        self.write_json(USER_STORAGE_KEY, user);
        self.write_json(TOKEN_STORAGE_KEY, &token);
    }

    pub fn clear(&self) {
        for key in [USER_STORAGE_KEY, TOKEN_STORAGE_KEY] {
            if let Err(e) = self.store.remove(key) {
                error!("Error removing {} from credential store: {}", key, e);
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                error!("Error getting {} from credential store: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error decoding {} from credential store: {}", key, e);
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(|e| CredentialStoreError::SerializationError(e.to_string()))
            .and_then(|raw| self.store.set(key, raw));

        if let Err(e) = result {
            error!("Error setting {} in credential store: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::credential_store_memory::InMemoryCredentialStore;

    fn user() -> User {
        User {
            id: "1".into(),
            email: "a@b.com".into(),
            name: "Ann".into(),
        }
    }

    #[test]
    fn test_save_then_read_back() {
        let store = InMemoryCredentialStore::default();
        let blob = CredentialBlob::new(&store);

        blob.save(&user(), "tok");

        assert_eq!(blob.user(), Some(user()));
        assert_eq!(blob.token().as_deref(), Some("tok"));
        // Token is stored as a JSON string, not raw text.
        assert_eq!(
            store.get(TOKEN_STORAGE_KEY).unwrap().as_deref(),
            Some("\"tok\"")
        );
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = InMemoryCredentialStore::default();
        let blob = CredentialBlob::new(&store);
        blob.save(&user(), "tok");

        blob.clear();

        assert!(store.get(USER_STORAGE_KEY).unwrap().is_none());
        assert!(store.get(TOKEN_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let store = InMemoryCredentialStore::default();
        store.set(USER_STORAGE_KEY, "{not json".to_string()).unwrap();

        assert!(CredentialBlob::new(&store).user().is_none());
    }
}
