//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Bind the TCP listener and serve the router until a shutdown signal.
//! - Define the Axum router with all routes and shared middleware.
//! - Inject shared application state (`AppState`) into handlers.
//! - Render every outcome through the JSON response envelope.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

/// Serve `router` on `addr` until SIGINT/SIGTERM, then drain in-flight
/// requests for at most `shutdown_timeout`.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound.
pub async fn serve(addr: &str, router: Router, shutdown_timeout: Duration) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %format!("http://{addr}"), "starting server");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        res = &mut server => {
            // The server stopped on its own; nothing left to drain.
            match res {
                Ok(Ok(())) => info!("server exited"),
                Ok(Err(e)) => error!(error = %e, "server failed"),
                Err(e) => error!(error = %e, "server task panicked"),
            }
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    info!("shutting down server");
    let _ = stop_tx.send(());

    match tokio::time::timeout(shutdown_timeout, server).await {
        Ok(Ok(Ok(()))) => info!("server exited properly"),
        Ok(Ok(Err(e))) => error!(error = %e, "failed to shut down server"),
        Ok(Err(e)) => error!(error = %e, "server task panicked"),
        Err(_) => warn!(
            timeout_secs = shutdown_timeout.as_secs(),
            "graceful shutdown timed out; dropping in-flight requests"
        ),
    }
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
