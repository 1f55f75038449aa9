//! Shutdown coordination.

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::lifecycle::signals;

/// Fan-out shutdown trigger.
///
/// Every long-running task holds a receiver; one `trigger` call wakes all of
/// them. Receivers created after the trigger never see it.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self {
            tx: broadcast::channel(1).0,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Wake every subscriber. A no-op when nobody is listening.
    pub fn trigger(&self) {
        if self.tx.send(()).is_err() {
            tracing::debug!("Shutdown triggered with no subscribers");
        }
    }

    /// Number of tasks still holding a receiver.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Trigger once the process receives Ctrl+C.
    pub fn trigger_on_ctrl_c(&self) -> JoinHandle<()> {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            signals::ctrl_c().await;
            let _ = tx.send(());
        })
    }

    /// Resolve when `rx` sees a trigger.
    ///
    /// If every sender is gone nobody can trigger any more, so this never
    /// resolves.
    pub async fn wait(mut rx: broadcast::Receiver<()>) {
        match rx.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => {}
            Err(RecvError::Closed) => std::future::pending::<()>().await,
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
