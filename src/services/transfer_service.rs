use tracing::info;

use super::Outcome;
use crate::api::bank::{ClientError, SessionClient};
use crate::models::{Account, Id};
use crate::services::auth_service;

/// Transfer form as typed by the user
#[derive(Debug, Clone, Default)]
pub struct TransferForm {
    pub from_account: String,
    pub to_account_number: String,
    pub amount: String,
    pub description: String,
}

/// A form that passed every client-side check
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransfer {
    pub from_account: Id,
    pub to_account_number: String,
    pub amount: f64,
    pub description: String,
    /// Balance of the source account as displayed to the user
    pub available_balance: f64,
}

/// Check a form against the accounts the user was shown.
///
/// The available balance comes from `accounts`, never from the server at
/// submission time.
pub fn validate_transfer(form: &TransferForm, accounts: &[Account]) -> Result<ValidatedTransfer, ClientError> {
    let from_account = form.from_account.trim();
    if from_account.is_empty() {
        return Err(ClientError::validation("Please select a source account"));
    }

    let to_account_number = form.to_account_number.trim();
    if to_account_number.is_empty() {
        return Err(ClientError::validation("Please enter recipient account number"));
    }

    let amount = form
        .amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or_else(|| ClientError::validation("Please enter a valid amount"))?;

    let source = accounts
        .iter()
        .find(|a| a.id.as_str() == from_account)
        .ok_or_else(|| ClientError::validation("Please select a source account"))?;

    if amount > source.balance {
        return Err(ClientError::validation("Insufficient balance"));
    }

    Ok(ValidatedTransfer {
        from_account: source.id.clone(),
        to_account_number: to_account_number.to_string(),
        amount,
        description: form.description.clone(),
        available_balance: source.balance,
    })
}

/// Load the user's accounts, validate the form against them, and only then
/// submit the transfer
pub async fn execute_transfer(client: &SessionClient, form: &TransferForm) -> Result<Outcome, ClientError> {
    auth_service::require_auth(client).await?;

    let accounts = client.get_accounts().await?;
    let transfer = validate_transfer(form, &accounts)?;

    let response = client
        .transfer(
            &transfer.from_account,
            &transfer.to_account_number,
            transfer.amount,
            Some(&transfer.description),
        )
        .await?;

    if response.success {
        info!(
            "Transferred {:.2} from {} to {}",
            transfer.amount, transfer.from_account, transfer.to_account_number
        );
        Ok(Outcome::success("Transfer completed successfully!"))
    } else {
        Ok(Outcome::failure(response.message, "Transfer failed"))
    }
}
