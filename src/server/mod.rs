//! HTTP server for the record service
//!
//! Wires the query engine behind an axum router:
//! - List, stats, export, and suggestion routes per record kind
//! - Role extraction from the `x-requester-role` header
//! - Graceful shutdown on SIGTERM and Ctrl+C

pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;

use anyhow::Result;
use tokio::net::TcpListener;

/// Serve the application with graceful shutdown
///
/// Binds to the configured address, serves requests, and handles SIGTERM
/// and SIGINT (Ctrl+C) for graceful shutdown.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr.clone();
    let app = build_router(state);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
