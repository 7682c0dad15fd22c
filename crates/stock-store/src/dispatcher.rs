//! Dispatcher for effects and middleware
//!
//! Effects and middleware never touch the store directly. They hold a
//! `Dispatcher`, which queues actions on an unbounded channel owned by the
//! store and then asks the store to apply the queue. When the store is
//! already applying actions (a middleware dispatching a follow-up, or
//! another thread holding the store), the action stays queued and the
//! current holder applies it before letting go. Either way actions are
//! applied in submission order.

use crate::ActionKind;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread::{self, ThreadId};
use tokio::sync::mpsc;

/// Applies queued actions; implemented by the store's shared core
pub(crate) trait Drain: Send + Sync {
    fn drain(&self) -> usize;
}

/// Dispatcher for sending actions back to the store
///
/// Cheap to clone; every clone feeds the same store.
pub struct Dispatcher<A> {
    tx: mpsc::UnboundedSender<A>,
    pending: Arc<AtomicUsize>,
    guard: Arc<ReduceGuard>,
    drain: Weak<dyn Drain>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            pending: Arc::clone(&self.pending),
            guard: Arc::clone(&self.guard),
            drain: Weak::clone(&self.drain),
        }
    }
}

impl<A: ActionKind> Dispatcher<A> {
    pub(crate) fn new(tx: mpsc::UnboundedSender<A>, drain: Weak<dyn Drain>) -> Self {
        Self {
            tx,
            pending: Arc::default(),
            guard: Arc::default(),
            drain,
        }
    }

    /// Dispatch an action to the store
    ///
    /// Returns once the action is applied, unless the store is busy
    /// applying other actions; it is then applied right after them.
    ///
    /// # Panics
    ///
    /// Panics when called from inside a running reducer. Reducers must be
    /// pure; dispatching from one breaks the single-writer guarantee.
    pub fn dispatch(&self, action: A) {
        self.guard.check(action.kind());

        self.pending.fetch_add(1, Ordering::SeqCst);
        if let Err(e) = self.tx.send(action) {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            log::error!("Failed to dispatch action: {}", e);
            return;
        }

        if let Some(store) = self.drain.upgrade() {
            store.drain();
        }
    }
}

impl<A> Dispatcher<A> {
    /// Mark an action as taken off the queue
    pub(crate) fn taken(&self) {
        self.pending.fetch_sub(1, Ordering::SeqCst);
    }

    /// Whether actions were sent but not yet applied
    pub(crate) fn has_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    pub(crate) fn reducing(&self) -> ReducingScope<'_> {
        self.guard.enter()
    }
}

/// Tracks which thread is currently running the reducer
#[derive(Debug, Default)]
pub(crate) struct ReduceGuard {
    reducing_on: Mutex<Option<ThreadId>>,
}

impl ReduceGuard {
    /// Mark the current thread as reducing until the returned scope drops
    pub(crate) fn enter(&self) -> ReducingScope<'_> {
        *self.reducing_on.lock().unwrap() = Some(thread::current().id());
        ReducingScope { guard: self }
    }

    fn check(&self, kind: &str) {
        let reentrant = *self.reducing_on.lock().unwrap() == Some(thread::current().id());
        if reentrant {
            panic!("reentrant dispatch of {kind}: actions cannot be dispatched while a reducer is running");
        }
    }
}

pub(crate) struct ReducingScope<'a> {
    guard: &'a ReduceGuard,
}

impl Drop for ReducingScope<'_> {
    fn drop(&mut self) {
        *self.guard.reducing_on.lock().unwrap() = None;
    }
}
