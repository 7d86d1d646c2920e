use std::collections::HashMap;
use std::sync::Mutex;

use super::{SessionStore, StorageError};

/// Process-local store, nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("auth_token").unwrap(), None);

        store.set("auth_token", "T1").unwrap();
        assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("T1"));

        store.set("auth_token", "T2").unwrap();
        assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("T2"));

        store.remove("auth_token").unwrap();
        assert_eq!(store.get("auth_token").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("user_data").is_ok());
    }
}
