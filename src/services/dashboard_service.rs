use tracing::warn;

use super::Outcome;
use crate::api::bank::{ClientError, SessionClient};
use crate::models::{Account, Transaction};
use crate::services::auth_service;

pub const NO_ACCOUNTS: &str = "No accounts found. Create your first account!";
pub const NO_RECENT_TRANSACTIONS: &str = "No recent transactions";
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

#[derive(Debug)]
pub struct DashboardView {
    pub accounts: Vec<Account>,
    /// Latest entries of the first account
    pub recent_transactions: Vec<Transaction>,
    /// Set when the account list loaded but its history did not
    pub recent_error: Option<String>,
}

impl DashboardView {
    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }
}

pub async fn load_dashboard(client: &SessionClient) -> Result<DashboardView, ClientError> {
    auth_service::require_auth(client).await?;

    let accounts = client.get_accounts().await?;
    if accounts.is_empty() {
        return Ok(DashboardView {
            accounts,
            recent_transactions: Vec::new(),
            recent_error: None,
        });
    }

    let first_id = accounts[0].id.clone();
    let (recent_transactions, recent_error) = match client.get_transactions(&first_id).await {
        Ok(mut transactions) => {
            transactions.truncate(RECENT_TRANSACTION_LIMIT);
            (transactions, None)
        }
        Err(e) => {
            warn!("Error loading transactions for {}: {}", first_id, e);
            (Vec::new(), Some(e.to_string()))
        }
    };

    Ok(DashboardView {
        accounts,
        recent_transactions,
        recent_error,
    })
}

/// Open a new account with an initial deposit given as typed
pub async fn create_account(
    client: &SessionClient,
    account_type: &str,
    initial_deposit: &str,
) -> Result<Outcome, ClientError> {
    auth_service::require_auth(client).await?;

    let account_type = account_type.trim();
    if account_type.is_empty() {
        return Err(ClientError::validation("Please choose an account type"));
    }

    let deposit: f64 = initial_deposit
        .trim()
        .parse()
        .ok()
        .filter(|d: &f64| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| ClientError::validation("Please enter a valid initial deposit"))?;

    let response = client.create_account(account_type, deposit).await?;
    if response.success {
        let message = match response.account_number {
            Some(number) => format!("Account {} created successfully!", number),
            None => "Account created successfully!".to_string(),
        };
        Ok(Outcome::success(message))
    } else {
        Ok(Outcome::failure(response.message, "Failed to create account"))
    }
}
