//! Session persistence
//!
//! The session client never touches the filesystem directly. It is handed a
//! [`SessionStore`] at construction and mirrors every token change into it.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::utils::encryption::CryptoError;

/// Storage key holding the raw auth token
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key holding the cached `{id, username}` record as JSON
pub const USER_DATA_KEY: &str = "user_data";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error("Session store lock was poisoned")]
    Poisoned,
}

/// Key/value persistence for session state.
///
/// Values are only ever replaced or removed as a whole.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
