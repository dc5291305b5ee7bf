//! Local liveness endpoint.
//!
//! # Responsibilities
//! - Expose this process's own liveness to the registry's external checker
//! - Serve independently of the monitor loop
//!
//! # Design Decisions
//! - Stateless fixed "OK" responder; the registered check spec tells the
//!   registry how often to poll it
//! - Unrelated to the monitor's client-side probing of other services

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

/// HTTP server for the liveness endpoint.
pub struct LivenessServer {
    listener: TcpListener,
}

impl LivenessServer {
    /// Bind the liveness endpoint. Bind failure is fatal at startup.
    pub async fn bind(address: &str, port: u16) -> std::io::Result<Self> {
        let listener = TcpListener::bind((address, port)).await?;
        tracing::info!(
            address = %listener.local_addr()?,
            "Liveness endpoint listening"
        );
        Ok(Self { listener })
    }

    /// Address the endpoint is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until the shutdown signal fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> std::io::Result<()> {
        let router = Router::new()
            .route("/health", get(health))
            .layer(TraceLayer::new_for_http());

        axum::serve(self.listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Liveness endpoint received shutdown signal");
            })
            .await
    }
}

/// Fixed liveness signal for the registry's own checker.
async fn health() -> &'static str {
    "OK"
}
