//! # Casita Server
//!
//! REST server for the Casita rental investment analytics engine.
//!
//! ## Features
//!
//! - `POST /v1/analyze` — full investment analysis for a market combination
//! - `POST /calculator/roi` — standalone simple ROI calculator
//! - `GET /v1/markets` and drill-down discovery endpoints
//! - Health endpoint, configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use casita_server::{Server, ServerConfig};
//!
//! let server = Server::new(config, source);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use casita_core::traits::MarketDataSource;

pub use config::ServerConfig;
pub use store::{InMemoryMarketStore, MarketEntry};

/// The Casita server.
pub struct Server {
    config: ServerConfig,
    source: Arc<dyn MarketDataSource>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, source: Arc<dyn MarketDataSource>) -> Self {
        Self { config, source }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.source.clone(), self.config.analysis.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Casita server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
