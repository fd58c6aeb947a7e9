//! # lokboardd: dashboard host
//!
//! Composition root that serves the compiled dashboard and forwards its data
//! requests to the statistics service.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Install the `tracing` subscriber
//! - Build the shared HTTP client and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on the adapter crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use lokboard_adapter_http_axum::router;
use lokboard_adapter_http_axum::state::AppState;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = AppState::new(&config.upstream.url, config.upstream_timeout())?;
    let app = router::build(state, &config.dashboard.assets_dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        upstream = %config.upstream.url,
        assets = %config.dashboard.assets_dir.display(),
        "lokboardd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("lokboardd shut down gracefully");
    Ok(())
}

/// Resolve when `signal` fires. If its handler could not be installed, never
/// resolve, so the other shutdown trigger stays in charge.
async fn signal_or_park(name: &str, signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(err) = signal.await {
        tracing::error!(error = %err, signal = name, "failed to install signal handler");
        std::future::pending::<()>().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = signal_or_park("ctrl_c", signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
