use super::render_outcome;
use crate::api::bank::{ClientError, SessionClient};
use crate::services::dashboard_service::{self, DashboardView, NO_ACCOUNTS, NO_RECENT_TRANSACTIONS};
use crate::utils::{format_date, format_money, Table};

pub async fn execute(client: &SessionClient) -> Result<String, ClientError> {
    let view = dashboard_service::load_dashboard(client).await?;
    let greeting = client
        .user_data()
        .await
        .map(|u| format!("Welcome, {}", u.username));
    Ok(render(greeting, &view))
}

pub fn render(greeting: Option<String>, view: &DashboardView) -> String {
    let mut sections = Vec::new();
    if let Some(greeting) = greeting {
        sections.push(greeting);
    }

    if !view.has_accounts() {
        sections.push(NO_ACCOUNTS.to_string());
        return sections.join("\n\n");
    }

    let mut accounts = Table::new(&["Id", "Number", "Type", "Balance", "Status"]);
    for account in &view.accounts {
        accounts.add_row(vec![
            account.id.to_string(),
            account.account_number.clone(),
            format!("{} Account", account.account_type),
            format_money(account.balance),
            account.status.clone().unwrap_or_default(),
        ]);
    }
    sections.push(format!("🏦 Accounts\n{}", accounts.render()));

    let recent = if let Some(error) = &view.recent_error {
        format!("Error loading transactions: {}", error)
    } else if view.recent_transactions.is_empty() {
        NO_RECENT_TRANSACTIONS.to_string()
    } else {
        let mut table = Table::new(&["Date", "Type", "Amount", "Status"]);
        for txn in &view.recent_transactions {
            table.add_row(vec![
                format_date(&txn.timestamp),
                txn.transaction_type.clone(),
                format_money(txn.amount),
                txn.status.clone(),
            ]);
        }
        table.render()
    };
    sections.push(format!("📋 Recent transactions\n{}", recent));

    sections.join("\n\n")
}

pub async fn open(client: &SessionClient, args: &[&str]) -> Result<String, ClientError> {
    if args.len() < 2 {
        return Ok("Usage: `open <account type> <initial deposit>` e.g. `open savings 100`".to_string());
    }

    let outcome = dashboard_service::create_account(client, args[0], args[1]).await?;
    Ok(render_outcome(&outcome, "✅"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_accounts_and_recent() {
        let view = DashboardView {
            accounts: serde_json::from_value(json!([
                {"id": "a1", "account_number": "ACC1001", "account_type": "checking", "balance": 1500.0, "status": "active"}
            ]))
            .unwrap(),
            recent_transactions: Vec::new(),
            recent_error: None,
        };

        let rendered = render(Some("Welcome, alice".into()), &view);
        assert!(rendered.starts_with("Welcome, alice"));
        assert!(rendered.contains("ACC1001"));
        assert!(rendered.contains("checking Account"));
        assert!(rendered.contains("$1500.00"));
        assert!(rendered.contains(NO_RECENT_TRANSACTIONS));
    }

    #[test]
    fn test_render_without_accounts() {
        let view = DashboardView {
            accounts: Vec::new(),
            recent_transactions: Vec::new(),
            recent_error: None,
        };
        assert_eq!(render(None, &view), NO_ACCOUNTS);
    }
}
