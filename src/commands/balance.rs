use crate::api::bank::{ClientError, SessionClient};
use crate::services::balance_service;
use crate::utils::format_money;

pub async fn execute(client: &SessionClient, args: &[&str]) -> Result<String, ClientError> {
    let Some(account_id) = args.first() else {
        return Ok("Usage: `balance <account id>` (ids are listed by `dashboard`)".to_string());
    };

    let result = balance_service::get_balance(client, account_id).await?;
    let label = result
        .account_number
        .unwrap_or_else(|| result.account_id.to_string());
    Ok(format!("💰 Balance of {}: {}", label, format_money(result.balance)))
}
