use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use bank_client::api::bank::SessionClient;
use bank_client::commands::{self, Reply};
use bank_client::config::Config;
use bank_client::storage::FileStore;

fn prompt() {
    print!("bank> ");
    let _ = std::io::stdout().flush();
}

/// Read commands from stdin until EOF or `quit`
async fn run_interactive(client: &SessionClient) -> std::io::Result<()> {
    println!("Type `help` for a list of commands.");
    if let Some(user) = client.user_data().await {
        println!("Welcome back, {}", user.username);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        match commands::handle_line(client, &line).await {
            Reply::Text(text) => println!("{}", text),
            Reply::Empty => {}
            Reply::Quit => break,
        }
        prompt();
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bank_client=info,bank=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };
    debug!("Using API at {}", config.api_base_url);

    let store = match FileStore::open(&config.session_file, config.session_cipher.clone()) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open session file {}: {}", config.session_file.display(), e);
            std::process::exit(1);
        }
    };
    if config.session_cipher.is_some() {
        info!("Session file {} is encrypted", store.path().display());
    }

    let client = SessionClient::new(config.api_base_url.clone(), Arc::new(store));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        match commands::handle_line(&client, &args.join(" ")).await {
            Reply::Text(text) => println!("{}", text),
            Reply::Empty | Reply::Quit => {}
        }
        return;
    }

    if let Err(e) = run_interactive(&client).await {
        error!("Failed to read input: {}", e);
    }
}
