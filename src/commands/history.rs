use crate::api::bank::{ClientError, SessionClient};
use crate::services::history_service::{self, HistoryView, NO_TRANSACTIONS};
use crate::utils::{format_money, Table};

/// `2` or `p2`
fn parse_page(arg: &str) -> Option<usize> {
    let arg = arg.to_lowercase();
    arg.strip_prefix('p').unwrap_or(&arg).parse().ok()
}

pub async fn execute(client: &SessionClient, args: &[&str]) -> Result<String, ClientError> {
    let (account_id, page) = match args {
        [] => (None, 1),
        [single] => match single.to_lowercase().strip_prefix('p').and_then(|n| n.parse::<usize>().ok()) {
            Some(page) => (None, page),
            None => (Some(*single), 1),
        },
        [id, page, ..] => {
            let page = parse_page(page).ok_or_else(|| {
                ClientError::validation("Invalid page number. Use: `history <account id> 2` or `history p2`")
            })?;
            (Some(*id), page)
        }
    };

    let view = history_service::load_history(client, account_id, page).await?;
    Ok(render(&view))
}

pub fn render(view: &HistoryView) -> String {
    let (Some(account), Some(page)) = (&view.account, &view.page) else {
        return format!("📋 Transaction History\n{}", NO_TRANSACTIONS);
    };

    let mut table = Table::new(&["Date", "Type", "From/To", "Description", "Amount", "Status"]);
    for row in &page.items {
        table.add_row(vec![
            row.date.clone(),
            row.transaction_type.clone(),
            row.counterparty.clone(),
            row.description.clone(),
            format_money(row.amount),
            row.status.clone(),
        ]);
    }

    let mut output = format!(
        "📋 Transaction History for {} ({})\n{}\nPage {}/{} ({} total transactions)",
        account.account_number,
        account.account_type,
        table.render(),
        page.current_page,
        page.total_pages,
        page.total_items
    );
    if !page.is_first() {
        output.push_str(&format!("\nPrevious: `history {} {}`", account.id, page.current_page - 1));
    }
    if !page.is_last() {
        output.push_str(&format!("\nNext: `history {} {}`", account.id, page.current_page + 1));
    }
    output
}
