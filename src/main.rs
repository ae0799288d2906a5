//! This project is split in 2 main modules:
//!
//! - [checkout] (API surface and pages used by the browser)
//! - [gateway] (Paystack integration)
#![doc = include_str!("../README.md")]

use std::{
    net::{Ipv4Addr, SocketAddrV4},
    sync::Arc,
};

use anyhow::Context;
use axum::Router;
use tracing_subscriber::EnvFilter;

/// Checkout API
///
/// Initializes and verifies payments on behalf of the payment form. Validation and the
/// success decision live here, the gateway only moves bytes.
mod checkout;

mod config;
/// Gateway integration implementation
///
/// This module defines the types and methods to communicate with an external gateway. In this case it is Paystack
mod gateway;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .init();

    match dotenvy::dotenv() {
        Ok(p) => tracing::info!(path = %p.display(), "Loaded environment variables from .env file"),
        Err(e) => tracing::warn!("Failed to load environment variables from .env: {e}"),
    };

    let config = config::Config::from_env()?;
    let gateway = gateway::PaystackGateway::new(config.base_url.clone(), config.timeout)
        .context("failed to build gateway http client")?;
    let port = config.port;
    let state = state::AppState::new(Arc::new(gateway), config);

    let app = Router::new()
        .merge(checkout::api::router())
        .merge(checkout::form::router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    tracing::info!("Serving on port {port}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
