//! `sealer` — tagseal service binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Generate the process-lifetime session key and seed [`SessionKeyStore`].
//! 4. Build the Axum router and start the HTTP server.

mod config;
mod envelope;
mod key;
mod server;
mod telemetry;

use anyhow::Result;
use tracing::info;

use config::Config;
use key::SessionKeyStore;
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        http_port = cfg.http_port,
        "tagseal starting"
    );

    // -----------------------------------------------------------------------
    // 3. Session key
    // -----------------------------------------------------------------------
    // One key per process lifetime. Envelopes sealed here are unreadable
    // after a restart.
    let key_store = SessionKeyStore::new();
    key_store.generate().await;
    info!("session key generated");

    // -----------------------------------------------------------------------
    // 4. HTTP server
    // -----------------------------------------------------------------------
    let state = AppState::new(key_store);
    let router = server::router::build(state);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.http_port).into();
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
