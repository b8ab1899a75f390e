//! Graceful shutdown signal handling.

use axum_server::Handle;

/// How long to wait for in-flight connections to drain before forcing exit.
const DRAIN_TIMEOUT_SECS: u64 = 30;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// On either signal the server stops accepting new connections and waits up
/// to [`DRAIN_TIMEOUT_SECS`] for existing connections to complete.
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
        }

        handle.graceful_shutdown(Some(std::time::Duration::from_secs(DRAIN_TIMEOUT_SECS)));
        tracing::info!(
            drain_timeout_secs = DRAIN_TIMEOUT_SECS,
            "Waiting for in-flight connections to close"
        );
    });
}
