use crate::api::bank::{ClientError, SessionClient};
use crate::models::{Account, Transaction};
use crate::services::auth_service;
use crate::utils::{format_date, Page};

pub const TRANSACTIONS_PER_PAGE: usize = 10;
pub const NO_TRANSACTIONS: &str = "No transactions found";

/// One history line, already in display form
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub transaction_type: String,
    pub counterparty: String,
    pub description: String,
    pub amount: f64,
    pub status: String,
}

impl HistoryRow {
    /// Describe `transaction` from the point of view of `account`
    pub fn from_transaction(transaction: &Transaction, account: &Account) -> Self {
        let counterparty = if transaction.is_outgoing_for(&account.id) {
            format!("To: {}", transaction.to_account)
        } else {
            format!("From: {}", transaction.from_account)
        };

        let description = transaction
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or("-")
            .to_string();

        HistoryRow {
            date: format_date(&transaction.timestamp),
            transaction_type: transaction.transaction_type.clone(),
            counterparty,
            description,
            amount: transaction.amount,
            status: transaction.status.clone(),
        }
    }
}

#[derive(Debug)]
pub struct HistoryView {
    /// Account whose history is shown; `None` when the user has no accounts
    pub account: Option<Account>,
    /// `None` when there is nothing to show
    pub page: Option<Page<HistoryRow>>,
}

/// History for `account_id`, or the first account when none is given
pub async fn load_history(
    client: &SessionClient,
    account_id: Option<&str>,
    page: usize,
) -> Result<HistoryView, ClientError> {
    auth_service::require_auth(client).await?;

    let accounts = client.get_accounts().await?;
    let account = match account_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => accounts
            .into_iter()
            .find(|a| a.id.as_str() == id)
            .ok_or_else(|| ClientError::validation(format!("Unknown account {}", id)))?,
        None => match accounts.into_iter().next() {
            Some(first) => first,
            None => return Ok(HistoryView { account: None, page: None }),
        },
    };

    let transactions = client.get_transactions(&account.id).await?;
    if transactions.is_empty() {
        return Ok(HistoryView {
            account: Some(account),
            page: None,
        });
    }

    let rows: Vec<HistoryRow> = transactions
        .iter()
        .map(|t| HistoryRow::from_transaction(t, &account))
        .collect();
    let total_pages = rows.len().div_ceil(TRANSACTIONS_PER_PAGE);

    let page = Page::paginate(rows, TRANSACTIONS_PER_PAGE, page).ok_or_else(|| {
        ClientError::validation(format!(
            "Invalid page number. History has {} page(s)",
            total_pages
        ))
    })?;

    Ok(HistoryView {
        account: Some(account),
        page: Some(page),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::test_support::{MockRoute, MockServer};
    use serde_json::json;
    use std::sync::Arc;

    fn accounts_route() -> MockRoute {
        MockRoute::json(
            "GET",
            "/api/accounts",
            200,
            json!([
                {"id": "a1", "account_number": "ACC1", "account_type": "checking", "balance": 10.0},
                {"id": "a2", "account_number": "ACC2", "account_type": "savings", "balance": 0.0}
            ]),
        )
    }

    fn transactions(n: usize) -> serde_json::Value {
        let list: Vec<_> = (0..n)
            .map(|i| {
                let (from, to) = if i % 2 == 0 { ("a1", "b7") } else { ("b7", "a1") };
                let description = if i == 0 { "rent" } else { "" };
                json!({
                    "id": format!("t{}", i), "from_account": from, "to_account": to,
                    "amount": i as f64, "transaction_type": "transfer", "status": "completed",
                    "timestamp": "2024-05-06T07:08:09", "description": description
                })
            })
            .collect();
        json!(list)
    }

    async fn client_for(server: &MockServer) -> SessionClient {
        let client = SessionClient::new(server.base_url(), Arc::new(MemoryStore::new()));
        client.set_token("T1").await.unwrap();
        client
    }

    #[tokio::test]
    async fn test_rows_show_direction_and_description() {
        let server = MockServer::start(vec![
            accounts_route(),
            MockRoute::json("GET", "/api/transactions/a1", 200, transactions(2)),
        ])
        .await;
        let client = client_for(&server).await;

        let view = load_history(&client, None, 1).await.unwrap();
        let page = view.page.unwrap();
        assert_eq!(page.items[0].counterparty, "To: b7");
        assert_eq!(page.items[0].description, "rent");
        assert_eq!(page.items[0].date, "2024-05-06 07:08");
        assert_eq!(page.items[1].counterparty, "From: b7");
        assert_eq!(page.items[1].description, "-");
    }

    #[tokio::test]
    async fn test_pagination() {
        let server = MockServer::start(vec![
            accounts_route(),
            MockRoute::json("GET", "/api/transactions/a2", 200, transactions(23)),
        ])
        .await;
        let client = client_for(&server).await;

        let view = load_history(&client, Some("a2"), 3).await.unwrap();
        assert_eq!(view.account.unwrap().account_number, "ACC2");
        let page = view.page.unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_pages, 3);

        let err = load_history(&client, Some("a2"), 4).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid page number. History has 3 page(s)");
    }

    #[tokio::test]
    async fn test_no_accounts_and_unknown_account() {
        let server = MockServer::start(vec![MockRoute::json("GET", "/api/accounts", 200, json!([]))]).await;
        let client = client_for(&server).await;

        let view = load_history(&client, None, 1).await.unwrap();
        assert!(view.account.is_none() && view.page.is_none());

        let err = load_history(&client, Some("zz"), 1).await.unwrap_err();
        assert_eq!(err.to_string(), "Unknown account zz");
    }
}
