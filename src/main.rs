//! Redemption Points Engine server.
//!
//! Loads the loyalty program from `REDEEM_CONFIG_DIR` (default
//! `./config/grocery`) and serves the API on `REDEEM_LISTEN_ADDR` (default
//! `0.0.0.0:3000`). Log filtering follows `RUST_LOG`.

use std::env;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use redeem_engine::api::{AppState, create_router};
use redeem_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/grocery";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("REDEEM_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let listen_addr =
        env::var("REDEEM_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load program from {}", config_dir))?;
    let router = create_router(AppState::new(config));

    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", listen_addr))?;
    info!(addr = %listen_addr, "Redemption engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
