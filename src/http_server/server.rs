//! # HTTP Server
//!
//! Combines the item and health routers, applies CORS and request tracing,
//! and serves them until a shutdown signal arrives.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::config::{ConfigError, HttpServerConfig};
use super::item_routes::item_routes;
use super::observability_routes::health_routes;
use crate::observability::request_trace_layer;
use crate::store::ItemStore;

/// HTTP server for the item API
pub struct HttpServer {
    addr: SocketAddr,
    router: Router,
}

impl HttpServer {
    /// Create a server serving `store` with the given configuration
    pub fn new<S: ItemStore>(config: &HttpServerConfig, store: S) -> Result<Self, ConfigError> {
        let addr = config.socket_addr()?;
        let router = Self::build_router(config, store)?;
        Ok(Self { addr, router })
    }

    /// Build the combined router with all endpoints
    fn build_router<S: ItemStore>(
        config: &HttpServerConfig,
        store: S,
    ) -> Result<Router, ConfigError> {
        let cors = cors_layer(config)?;

        Ok(Router::new()
            .merge(item_routes(store.clone()))
            .layer(request_trace_layer())
            // Attached after the trace layer so health probes are not traced
            .merge(health_routes(store))
            .layer(cors))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C or SIGTERM
    pub async fn start(self) -> io::Result<()> {
        self.start_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests
    pub async fn start_with_shutdown<F>(self, signal: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!(addr = %self.addr, "item service listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("item service stopped");
        Ok(())
    }
}

/// Only the configured origin may call with credentials, using the four item
/// verbs and a Content-Type header. Other origins get no CORS headers at all.
pub fn cors_layer(config: &HttpServerConfig) -> Result<CorsLayer, ConfigError> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.cors_origin()?]))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
