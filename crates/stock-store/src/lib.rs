//! Redux-style state container
//!
//! This crate provides the state-management core used by the stock admin
//! client. The moving parts mirror the classic Redux loop:
//!
//! ```text
//!                ┌──────────────────────────────────────────┐
//!  Effect ──────►│ Dispatcher (channel) ──┐                 │
//!                │                        ▼                 │
//!  Action ──────►│ Middleware chain ──► Reducer ──► State   │──► Subscribers
//!                │                                   │      │
//!                └───────────────────────────────────┼──────┘
//!                                                    ▼
//!                                     StateReader / Selectors
//! ```
//!
//! - [`Store`] owns the current snapshot and applies actions in order.
//! - [`Reducer`] is a pure `(state, &action) -> state` function.
//! - [`Effect`] is an asynchronous action creator invoked with a
//!   [`Dispatcher`] and a [`StateReader`].
//! - [`Memoized`] is a one-slot memoizing selector.
//!
//! # Example
//!
//! ```rust
//! use stock_store::{ActionKind, Store};
//!
//! #[derive(Debug, Clone)]
//! enum Counter {
//!     Increment,
//! }
//!
//! impl ActionKind for Counter {
//!     fn kind(&self) -> &'static str {
//!         "COUNTER_INCREMENT"
//!     }
//! }
//!
//! let mut store = Store::new(0u32, |state: u32, _action: &Counter| state + 1);
//! store.dispatch(Counter::Increment);
//! assert_eq!(*store.state(), 1);
//! ```

pub mod dispatcher;
pub mod effect;
pub mod middleware;
pub mod record;
pub mod reducer;
pub mod selector;
pub mod state;
pub mod store;

pub use dispatcher::Dispatcher;
pub use effect::{BoxFuture, Effect, EffectOutcome};
pub use middleware::{logging::LoggingMiddleware, Middleware};
pub use record::Record;
pub use reducer::Reducer;
pub use selector::{Memoized, Selector, SliceKey};
pub use state::StateReader;
pub use store::{Store, Subscription};

/// Stable name of an action, used for logging and diagnostics
///
/// Kinds are drawn from a fixed set per feature (e.g. `PRODUCT_LOADING`).
pub trait ActionKind {
    fn kind(&self) -> &'static str;
}
