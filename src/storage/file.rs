use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use super::{SessionStore, StorageError};
use crate::utils::encryption::SessionCipher;

/// Session store backed by a single JSON object file.
///
/// Every mutation rewrites the whole file. When a cipher is configured the
/// values are stored encrypted, keys stay readable.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cipher: Option<SessionCipher>,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the session file at `path`.
    ///
    /// A file that is not a JSON object of strings opens as empty and is
    /// overwritten on the next change.
    pub fn open(path: impl Into<PathBuf>, cipher: Option<SessionCipher>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).unwrap_or_else(|e| {
                    warn!("Ignoring unreadable session file {}: {}", path.display(), e);
                    BTreeMap::new()
                })
            }
        } else {
            BTreeMap::new()
        };

        debug!("Opened session file {} ({} keys)", path.display(), values.len());

        Ok(Self {
            path,
            cipher,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        match (values.get(key), &self.cipher) {
            (None, _) => Ok(None),
            (Some(stored), None) => Ok(Some(stored.clone())),
            (Some(stored), Some(cipher)) => Ok(Some(cipher.decrypt(stored)?)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let stored = match &self.cipher {
            Some(cipher) => cipher.encrypt(value)?,
            None => value.to_string(),
        };

        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        let mut updated = values.clone();
        updated.insert(key.to_string(), stored);
        self.persist(&updated)?;
        *values = updated;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        if !values.contains_key(key) {
            return Ok(());
        }
        let mut updated = values.clone();
        updated.remove(key);
        self.persist(&updated)?;
        *values = updated;
        Ok(())
    }
}
