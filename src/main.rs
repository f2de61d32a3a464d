//! Address Book - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout, loading the address
//! book snapshot on start and saving it on exit.

use address_book::config::DEFAULT_LOG_LEVEL;
use address_book::repositories::{BookRepository, JsonFileBookRepository};
use address_book::{Config, Session};
use anyhow::Result;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is the conversation with the user)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(path = %config.storage_path.display(), "Using address book snapshot");

    let repository =
        Arc::new(JsonFileBookRepository::new(config.storage_path.clone())) as Arc<dyn BookRepository>;

    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    let mut session = Session::open(repository, &mut output).await?;
    session.run(&mut input, &mut output).await?;
    session.save(&mut input, &mut output).await?;

    info!("Address book session complete");
    Ok(())
}
