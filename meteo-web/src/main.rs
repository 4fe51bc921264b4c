//! Binary crate for the `meteo` web server.
//!
//! Serves the lookup page and the JSON advice endpoint. One pipeline run
//! per request; no state is shared between requests beyond the clients.

use std::sync::Arc;

use anyhow::Context;
use meteo_core::{Config, Pipeline};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let pipeline = Arc::new(Pipeline::from_config(&config)?);

    let port = listening_port()?;
    let app = routes::router(pipeline);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    info!(port, "meteo web server listening");

    axum::serve(listener, app)
        .await
        .context("Server exited with an error")?;

    Ok(())
}

/// Listening port from the environment, read once at startup.
fn listening_port() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("PORT '{raw}' is not a valid port number")),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_PORT),
        Err(err) => Err(err).context("PORT is not valid unicode"),
    }
}
