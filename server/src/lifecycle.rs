//! Process lifecycle: shutdown signals and bounded graceful shutdown.

use anyhow::Context;
use axum::Router;
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

/// Resolve on Ctrl+C or, on unix, SIGTERM.
///
/// If a handler cannot be installed the error is logged and that source
/// never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}

/// Serve `app` until `signal` resolves, then give in-flight requests at
/// most `grace` to finish.
///
/// Returns `Ok` as soon as every connection has finished, or when the grace
/// period runs out, whichever comes first. Connections still open after the
/// grace period are abandoned; they are dropped when the runtime shuts down
/// as the process exits.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve_with_grace<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            // Server stopped before any shutdown signal
            return result
                .context("server task failed")?
                .context("server error");
        },
        () = signal => {},
    }

    let _ = stop_tx.send(());
    info!(grace_secs = grace.as_secs(), "Draining in-flight requests");

    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => {
            result
                .context("server task failed")?
                .context("server error")?;
            info!("Server stopped");
        }
        Err(_) => {
            server.abort();
            warn!(
                grace_secs = grace.as_secs(),
                "Grace period elapsed, abandoning remaining connections"
            );
        }
    }

    Ok(())
}
