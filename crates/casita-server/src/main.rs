//! Casita server entry point.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use casita_server::{InMemoryMarketStore, Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,casita=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Casita Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/casita.toml".to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    // Seed the market data store
    let store = match &config.market_data_file {
        Some(path) => {
            let store = InMemoryMarketStore::load_from_file(path)?;
            info!("Loaded {} market combinations from {}", store.len(), path);
            store
        }
        None => {
            warn!("No market data file configured; analysis requests will find no data");
            InMemoryMarketStore::new()
        }
    };

    Server::new(config, Arc::new(store)).start().await?;

    Ok(())
}
