//! ColdTrack - Refrigeration Inventory Management Client

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coldtrack::{
    cli::Cli,
    config::AppConfig,
    services::Services,
    store::{LocalReferenceStore, RecordApi, RecordStoreClient},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("coldtrack={}", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::debug!("ColdTrack v{}", env!("CARGO_PKG_VERSION"));

    // Wire the record store client and the local reference store
    let store: Arc<dyn RecordApi> = Arc::new(RecordStoreClient::new(config.store.base_url.clone()));
    let references = LocalReferenceStore::new(&config.references.path);
    let services = Services::new(store, references);

    let mut state = AppState {
        config: Arc::new(config),
        services,
    };

    cli.run(&mut state).await
}
