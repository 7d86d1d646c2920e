//! Transaction models

use serde::{Deserialize, Serialize};

use super::Id;

/// A ledger entry as listed by `GET /transactions/{account_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Id,
    pub from_account: Id,
    pub to_account: Id,
    pub amount: f64,
    pub transaction_type: String,
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    /// Whether `account_id` is the sending side of this transaction
    pub fn is_outgoing_for(&self, account_id: &Id) -> bool {
        &self.from_account == account_id
    }
}
