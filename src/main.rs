//! Contacts Service - Main entry point

use anyhow::Result;
use contacts_service::repositories::{ContactRepository, SqliteContactRepository};
use contacts_service::services::{ContactService, ContactServiceImpl};
use contacts_service::{AppState, Config, Database};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (RUST_LOG wins over LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    // Open the store. Schema failures are logged, not fatal: the server still
    // comes up and reports storage errors per request.
    let database = Database::open(&config.database_path)?;
    match database.ensure_schema().await {
        Ok(()) => info!(path = %config.database_path, "Connected to SQLite database"),
        Err(e) => error!(path = %config.database_path, "Database connection error: {}", e),
    }

    let contact_repo = Arc::new(SqliteContactRepository::new(database.pool().clone()))
        as Arc<dyn ContactRepository>;
    let service = Arc::new(ContactServiceImpl::new(contact_repo)) as Arc<dyn ContactService>;
    let state = AppState::new(service, config.max_page_limit);
    let metrics = state.metrics.clone();

    let listener = TcpListener::bind(config.bind_addr()).await?;
    contacts_service::server::run_server(listener, state).await?;

    database.close().await;
    info!("{}", metrics.summary());
    info!("Contacts service shutdown complete");
    Ok(())
}
