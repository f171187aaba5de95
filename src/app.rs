//! src/app.rs
//!
//! Defines the main `App` struct, which encapsulates the application's
//! configuration and manages the lifecycle of the HTTP server.

use crate::{api::ApiServer, config::Config, error::Result};
use tokio_util::sync::CancellationToken;

/// Encapsulates the entire application, including its configuration and the
/// lifecycle management of the server task.
pub struct App {
    config: Config,
    shutdown_token: CancellationToken,
}

impl App {
    /// Creates a new `App` from the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            shutdown_token: CancellationToken::new(),
        })
    }

    /// Returns a clone of the master shutdown token. Cancelling it shuts the
    /// application down gracefully, exactly as Ctrl+C does.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// The main run loop for the application.
    ///
    /// This function performs the following steps:
    ///   1. Spawns the `ApiServer` in its own asynchronous Tokio task.
    ///   2. Installs a Ctrl+C listener that cancels the shutdown token.
    ///   3. Awaits server termination and propagates any failure.
    pub async fn run(self) -> Result<()> {
        tracing::info!(bind_addr = %self.config.bind_addr, "🚀 Starting server...");

        let api_server = ApiServer::new(self.config.bind_addr);
        let api_task = tokio::spawn(api_server.run(self.shutdown_token.clone()));
        tracing::debug!("API server task spawned.");

        let shutdown_token = self.shutdown_token.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for Ctrl+C");
            tracing::info!("Ctrl+C received. Initiating graceful shutdown...");
            shutdown_token.cancel();
        });

        // The server task completes once the shutdown token is cancelled and
        // in-flight connections have drained.
        api_task.await??;

        tracing::info!("👋 Server has shut down gracefully.");
        Ok(())
    }
}
