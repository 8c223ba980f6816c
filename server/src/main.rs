//! Tasklist HTTP server binary.
//!
//! Run with: `cargo run --bin tasklist`
//! List: `curl http://localhost:3000/todos`

use tasklist_server::{init_tracing, run, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_tracing(&config.server.log_level)?;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        shutdown_grace_secs = config.server.shutdown_grace_secs,
        metrics_enabled = config.metrics_enabled,
        "Configuration loaded"
    );

    run(config).await?;

    tracing::info!("Tasklist server shut down");
    Ok(())
}
