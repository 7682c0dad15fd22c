//! Loading indicator driven by store notifications

use crate::selectors::any_loading;
use crate::state::AppState;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use stock_store::StateReader;

/// Tracks the last seen loading flag and reports transitions
#[derive(Default)]
pub struct LoadingIndicator {
    active: AtomicBool,
}

impl LoadingIndicator {
    /// Record the current flag, returning it only when it changed
    pub fn transition(&self, loading: bool) -> Option<bool> {
        let previous = self.active.swap(loading, Ordering::SeqCst);
        (previous != loading).then_some(loading)
    }

    /// Subscriber callback writing the indicator to stderr
    pub fn callback(self: Arc<Self>, reader: StateReader<AppState>) -> impl Fn() + Send + Sync {
        move || match self.transition(any_loading(&reader.get())) {
            Some(true) => {
                eprint!("Loading...");
                if let Err(e) = std::io::stderr().flush() {
                    log::debug!("Failed to flush loading indicator: {}", e);
                }
            }
            Some(false) => eprintln!(" done"),
            None => {}
        }
    }
}
