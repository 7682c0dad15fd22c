//! Effects - asynchronous action creators
//!
//! An effect is invoked by [`Store::dispatch_effect`](crate::Store::dispatch_effect)
//! with a [`Dispatcher`] and a [`StateReader`]. It typically dispatches a
//! "loading" action, performs an external call, and dispatches the result
//! as more actions once the call completes.
//!
//! Any `FnOnce(Dispatcher<A>, StateReader<S>) -> O` is an effect.

use crate::dispatcher::Dispatcher;
use crate::state::StateReader;
use std::future::Future;
use std::pin::Pin;

/// BoxFuture type alias for effect results
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Final outcome of an asynchronous effect
///
/// Failures are reported through actions and notifications inside the
/// effect; the outcome only tells the caller which path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    Succeeded,
    Failed,
}

impl EffectOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EffectOutcome::Succeeded)
    }
}

/// An effect run against a store
pub trait Effect<S, A> {
    type Output;

    fn run(self, dispatcher: Dispatcher<A>, state: StateReader<S>) -> Self::Output;
}

impl<S, A, F, O> Effect<S, A> for F
where
    F: FnOnce(Dispatcher<A>, StateReader<S>) -> O,
{
    type Output = O;

    fn run(self, dispatcher: Dispatcher<A>, state: StateReader<S>) -> O {
        self(dispatcher, state)
    }
}
