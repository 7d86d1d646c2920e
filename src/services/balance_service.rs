use crate::api::bank::{ClientError, SessionClient};
use crate::models::Id;
use crate::services::auth_service;

pub struct BalanceResult {
    pub account_id: Id,
    pub account_number: Option<String>,
    pub balance: f64,
}

pub async fn get_balance(client: &SessionClient, account_id: &str) -> Result<BalanceResult, ClientError> {
    auth_service::require_auth(client).await?;

    let account_id = account_id.trim();
    if account_id.is_empty() {
        return Err(ClientError::validation("Please specify an account id"));
    }

    let id = Id::from(account_id);
    let response = client.get_balance(&id).await?;

    Ok(BalanceResult {
        account_id: response.account_id.unwrap_or(id),
        account_number: response.account_number,
        balance: response.balance,
    })
}
