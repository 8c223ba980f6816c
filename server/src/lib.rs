//! Tasklist HTTP server.
//!
//! Wires configuration, tracing, the todo store and the axum router into a
//! running process:
//!
//! 1. Load `.env` (if present) and [`Config`] from the environment
//! 2. Initialize tracing with the configured filter
//! 3. Build the store, optionally install the Prometheus recorder
//! 4. Bind the listener and serve until Ctrl+C or SIGTERM
//! 5. Drain in-flight requests for at most the grace period

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]

pub mod config;
pub mod lifecycle;

pub use config::Config;

use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tasklist_core::{TodoReducer, TodoState};
use tasklist_runtime::metrics::MetricsRecorder;
use tasklist_runtime::TodoStore;
use tasklist_web::{build_router, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Invalid filter directives fall back to [`config::DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("failed to initialize tracing")
}

/// Build the application router from configuration.
///
/// # Errors
///
/// Returns an error if metrics are enabled and the recorder cannot be
/// installed.
pub fn build_app(config: &Config) -> anyhow::Result<Router> {
    let store = TodoStore::new(TodoState::new(), TodoReducer::new());
    let mut state = AppState::new(store).with_legacy_create_status(config.legacy_create_status);

    if config.metrics_enabled {
        let mut recorder = MetricsRecorder::new();
        recorder
            .install()
            .context("failed to install metrics recorder")?;
        state = state.with_metrics(Arc::new(recorder));
        info!("Metrics endpoint enabled at /metrics");
    }

    Ok(build_router(state))
}

/// Bind the configured address and serve until a shutdown signal.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let app = build_app(&config)?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        address = %addr,
        legacy_create_status = config.legacy_create_status,
        "Starting HTTP server"
    );

    lifecycle::serve_with_grace(
        listener,
        app,
        lifecycle::shutdown_signal(),
        config.shutdown_grace(),
    )
    .await
}
