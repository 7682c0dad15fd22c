//! Middleware system
//!
//! Middleware sits between action dispatch and reducer execution:
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can inspect the action and the current snapshot, queue
//! follow-up actions through the [`Dispatcher`], or consume the action so it
//! never reaches the reducer.

use crate::dispatcher::Dispatcher;

pub mod logging;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware<S, A>: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current snapshot (read-only)
    /// - `dispatcher`: Queue follow-up actions, applied after this one
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &A, state: &S, dispatcher: &Dispatcher<A>) -> bool;
}
