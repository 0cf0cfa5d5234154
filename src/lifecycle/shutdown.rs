//! Shutdown coordination.
//!
//! # Responsibilities
//! - Fan the stop signal out to the listener loop
//! - Translate Ctrl+C into that signal
//!
//! # Design Decisions
//! - The listener drains in-flight requests on its own; the API process
//!   is torn down by the entrypoint after the listener returns

use tokio::sync::broadcast;

/// Hands the stop signal to the listener so it can stop accepting and
/// drain, after which the entrypoint kills the API server process.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Obtain a receiver for the stop signal. Subscribe before the
    /// signal can fire; a late subscriber never sees it.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the stop signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Spawn a task that fires the stop signal on Ctrl+C, consuming the
    /// coordinator.
    pub fn install_ctrl_c(self) {
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                return;
            }
            tracing::info!("Shutdown signal received");
            self.trigger();
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
