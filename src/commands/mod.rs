pub mod auth;
pub mod balance;
pub mod dashboard;
pub mod help;
pub mod history;
pub mod transfer;

use tracing::debug;

use crate::api::bank::{ClientError, SessionClient};
use crate::services::Outcome;
use crate::utils::user_message;

/// What the prompt loop should do after a line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Print this and keep going
    Text(String),
    /// Blank line, nothing to do
    Empty,
    Quit,
}

/// `icon message` on success, `❌ message` otherwise
fn render_outcome(outcome: &Outcome, icon: &str) -> String {
    if outcome.success {
        format!("{} {}", icon, outcome.message)
    } else {
        format!("❌ {}", outcome.message)
    }
}

/// Parse one command line and run it. Failures are rendered in place,
/// never propagated.
pub async fn handle_line(client: &SessionClient, line: &str) -> Reply {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = parts.split_first() else {
        return Reply::Empty;
    };

    let result: Result<String, ClientError> = match command.to_lowercase().as_str() {
        "login" => auth::login(client, args).await,
        "register" => auth::register(client, args).await,
        "logout" => auth::logout(client).await,
        "whoami" => auth::whoami(client).await,
        "dashboard" | "accounts" => dashboard::execute(client).await,
        "open" | "create_account" => dashboard::open(client, args).await,
        "balance" | "bal" => balance::execute(client, args).await,
        "transfer" | "send" => transfer::execute(client, args).await,
        "history" | "tr" => history::execute(client, args).await,
        "help" => Ok(help::execute()),
        "quit" | "exit" => return Reply::Quit,
        other => Ok(format!("Unknown command `{}`. Type `help` for a list of commands.", other)),
    };

    match result {
        Ok(text) => Reply::Text(text),
        Err(e) => {
            debug!("Error executing command {}: {}", command, e);
            Reply::Text(user_message(&e))
        }
    }
}
