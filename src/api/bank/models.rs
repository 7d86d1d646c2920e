use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Id;
use crate::storage::StorageError;

/// Request body for POST /login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Request body for POST /register
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for POST /accounts
#[derive(Debug, Clone, Serialize)]
pub struct CreateAccountRequest<'a> {
    pub account_type: &'a str,
    pub initial_deposit: f64,
}

/// Request body for POST /transfer
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest<'a> {
    pub from_account: &'a str,
    pub to_account_number: &'a str,
    pub amount: f64,
    pub description: &'a str,
}

/// Response from POST /login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: Option<String>,
    pub user_id: Option<Id>,
    pub username: Option<String>,
    pub message: Option<String>,
}

/// Generic `{success, message?}` acknowledgement used by register,
/// account creation and transfer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    /// Only set by account creation
    pub account_number: Option<String>,
}

/// Response from GET /balance/{account_id}
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub balance: f64,
    pub account_id: Option<Id>,
    pub account_number: Option<String>,
}

/// Everything a client operation can fail with.
///
/// The `Display` output is the human-readable message shown to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure, no HTTP response was received
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Rejected by the caller before any request was sent
    #[error("{0}")]
    Validation(String),
    #[error("Please log in first")]
    NotAuthenticated,
    #[error("Failed to create auth header: {0}")]
    InvalidHeader(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }
}
