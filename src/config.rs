use std::path::PathBuf;

use thiserror::Error;

use crate::api::bank::SessionClient;
use crate::utils::encryption::{CryptoError, SessionCipher};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BANK_SESSION_KEY is invalid: {0}")]
    InvalidSessionKey(#[from] CryptoError),
}

/// Runtime settings, read from the environment (and `.env`, via dotenv)
#[derive(Debug, Clone)]
pub struct Config {
    /// API root every endpoint is appended to
    pub api_base_url: String,
    /// Where the session token and user record are persisted
    pub session_file: PathBuf,
    /// Encrypts persisted session values when set
    pub session_cipher: Option<SessionCipher>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_base_url = non_empty("BANK_API_URL")
            .unwrap_or_else(|| SessionClient::DEFAULT_BASE_URL.to_string());

        let session_file = non_empty("BANK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);

        let session_cipher = non_empty("BANK_SESSION_KEY")
            .map(|key| SessionCipher::from_hex(&key))
            .transpose()?;

        Ok(Self {
            api_base_url,
            session_file,
            session_cipher,
        })
    }
}

fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("bank-client").join("session.json"))
        .unwrap_or_else(|| PathBuf::from(".bank-client").join("session.json"))
}
