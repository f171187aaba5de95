//! src/api/mod.rs
//!
//! Defines the `ApiServer` service, which serves the application's HTTP
//! endpoints.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

pub mod routes;

pub struct ApiServer {
    bind_addr: SocketAddr,
}

impl ApiServer {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    pub async fn run(self, shutdown_token: CancellationToken) -> crate::error::Result<()> {
        let app = router();

        tracing::info!(listen_addr = %self.bind_addr, "API server listening");

        let listener = tokio::net::TcpListener::bind(self.bind_addr).await?;

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_token.cancelled().await;
                tracing::info!("API server received shutdown signal.");
            })
            .await?;

        Ok(())
    }
}

/// Builds the application's router. Exposed so tests can issue requests
/// against it in-process, without binding a socket.
pub fn router() -> Router {
    Router::new()
        .route("/", get(routes::root))
        .layer(TraceLayer::new_for_http())
}
