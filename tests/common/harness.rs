//! tests/common/harness.rs
//!
//! A test harness for spawning real server instances. This module provides
//! the building blocks for the end-to-end tests, abstracting away the
//! boilerplate of:
//! - Allocating an ephemeral port for each server.
//! - Spawning the application in the background.
//! - Waiting until the listener is accepting connections.
//! - Managing graceful shutdown.

use anyhow::{Context, Result};
use hello_service::{App, Config};
use std::{
    net::{SocketAddr, TcpListener},
    time::Duration,
};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// A handle to a running server instance in a test environment.
pub struct TestServer {
    pub config: Config,
    pub addr: SocketAddr,
    shutdown_token: CancellationToken,
}

impl TestServer {
    /// Configures and spawns a new server in a background task.
    pub async fn spawn() -> Result<Self> {
        let addr = get_ephemeral_addr()?;
        let config = Config { bind_addr: addr };

        let app = App::new(config.clone()).context("Failed to create app")?;
        let shutdown_token = app.shutdown_token();

        tokio::spawn(async move {
            if let Err(e) = app.run().await {
                tracing::error!(error = ?e, "Test server app failed");
            }
        });

        wait_until_accepting(addr, Duration::from_secs(2)).await?;
        info!(addr = %addr, "Spawned test server");

        Ok(Self {
            config,
            addr,
            shutdown_token,
        })
    }

    /// Returns the full URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Shuts down the server gracefully.
    pub fn shutdown(&self) {
        self.shutdown_token.cancel();
    }
}

fn get_ephemeral_addr() -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?)
}

/// Polls until the server accepts TCP connections, or the timeout elapses.
async fn wait_until_accepting(addr: SocketAddr, timeout: Duration) -> Result<()> {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) if tokio::time::Instant::now() < deadline => {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            Err(e) => return Err(e).context("Server never started accepting connections"),
        }
    }
}

/// Polls until connections to the server are refused, or the timeout elapses.
pub async fn wait_until_refusing(addr: SocketAddr, timeout: Duration) -> Result<()> {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        match tokio::net::TcpStream::connect(addr).await {
            Err(_) => return Ok(()),
            Ok(_) if tokio::time::Instant::now() < deadline => {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            Ok(_) => anyhow::bail!("Server still accepting connections at {addr}"),
        }
    }
}
