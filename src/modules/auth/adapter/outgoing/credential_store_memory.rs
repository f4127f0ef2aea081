use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::auth::application::ports::outgoing::credential_store::{
    CredentialStore, CredentialStoreError,
};

/// Process-local `CredentialStore`.
///
/// Clones share the same map, so a "restart" can be simulated by building a
/// new session over a clone of the store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, CredentialStoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), CredentialStoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CredentialStoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
