use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use crate::auth::application::ports::outgoing::credential_store::{
    CredentialStore, CredentialStoreError,
};

/// JSON-file-backed `CredentialStore`.
///
/// ## On-disk format
/// ```text
/// { "portfolio_user": "{\"id\":\"1\",...}", "portfolio_token": "\"abc\"" }
/// ```
/// One flat object of string values. A missing file is an empty store.
/// Every write rewrites the whole file through a sibling temp file + rename,
/// so a crash mid-write leaves the previous contents intact. A file that no
/// longer parses fails reads, and the next write replaces it.
/// On unix the file is created owner-only (`0600`).
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CredentialStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(CredentialStoreError::StorageError(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| CredentialStoreError::SerializationError(e.to_string()))
    }

    /// Entries to build the next write on, and whether unparseable contents
    /// were dropped to get them.
    fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool), CredentialStoreError> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(CredentialStoreError::SerializationError(e)) => {
                warn!(
                    "Discarding unreadable credential file {}: {}",
                    self.path.display(),
                    e
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CredentialStoreError::StorageError(e.to_string()))?;
        }

        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| CredentialStoreError::SerializationError(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        write_private(&tmp, raw.as_bytes())
            .map_err(|e| CredentialStoreError::StorageError(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| CredentialStoreError::StorageError(e.to_string()))?;

        debug!("Credential store written to {}", self.path.display());
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, CredentialStoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: String) -> Result<(), CredentialStoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut entries, _) = self.load_for_write()?;
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), CredentialStoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut entries, discarded) = self.load_for_write()?;
        if entries.remove(key).is_none() && !discarded {
            return Ok(());
        }
        self.persist(&entries)
    }
}

#[cfg(unix)]
fn write_private(path: &std::path::Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies on creation; a leftover temp file keeps its bits otherwise.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &std::path::Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)
}
