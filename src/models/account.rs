//! Account models

use serde::{Deserialize, Serialize};

use super::Id;

/// A bank account as listed by `GET /accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Id,
    pub account_number: String,
    pub account_type: String,
    pub balance: f64,
    #[serde(default)]
    pub status: Option<String>,
}
