//! Read access to published snapshots

use std::sync::Arc;
use tokio::sync::watch;

/// Read-only handle to the latest committed snapshot
///
/// Handed to effects as their `getState` accessor and usable by any
/// observer that lives outside the store's owner. Snapshots are immutable,
/// so readers never see a partial update.
pub struct StateReader<S> {
    rx: watch::Receiver<Arc<S>>,
}

impl<S> Clone for StateReader<S> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}

impl<S> StateReader<S> {
    pub(crate) fn new(rx: watch::Receiver<Arc<S>>) -> Self {
        Self { rx }
    }

    /// Current snapshot
    pub fn get(&self) -> Arc<S> {
        Arc::clone(&self.rx.borrow())
    }

    /// Wait until a new snapshot is committed
    ///
    /// Returns `false` once the store has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
