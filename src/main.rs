//! src/main.rs
//!
//! The entrypoint for the hello-service binary.
//!
//! This file is intentionally minimal. Its sole responsibilities are:
//!   - Setting up the asynchronous `tokio` runtime.
//!   - Initializing the tracing subscriber.
//!   - Loading the configuration and handing control to the `App`.

use anyhow::Context;
use hello_service::{App, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // `RUST_LOG=info` prints all info-level logs and below (warn, error).
    // Use `RUST_LOG=debug` or `RUST_LOG=trace` for more detail.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "💥 Application failed to run");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    App::new(config)?.run().await?;
    Ok(())
}
