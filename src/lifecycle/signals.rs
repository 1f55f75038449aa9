//! OS signal handling.
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGINT/Ctrl+C triggers graceful shutdown; nothing else is handled

/// Resolve when the process receives Ctrl+C.
///
/// If the handler cannot be installed the error is logged and the future
/// never resolves, leaving shutdown to the coordinator.
pub async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
