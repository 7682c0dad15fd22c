use crate::dispatcher::{Dispatcher, Drain};
use crate::effect::Effect;
use crate::middleware::Middleware;
use crate::reducer::Reducer;
use crate::state::StateReader;
use crate::ActionKind;
use std::future::Future;
use std::sync::{Arc, Mutex, TryLockError, Weak};
use tokio::sync::{mpsc, watch};

type Callback = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

/// Handle returned by [`Store::subscribe`]
///
/// Dropping the handle keeps the subscription alive; call
/// [`Subscription::unsubscribe`] to remove the callback.
#[must_use = "keep the handle to be able to unsubscribe"]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Mutex<Subscribers>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers
                .lock()
                .unwrap()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Everything a dispatch writes, serialized under one mutex
struct Core<S, A> {
    state: Arc<S>,
    reducer: Box<dyn Reducer<S, A> + Send>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    action_rx: mpsc::UnboundedReceiver<A>,
}

struct Shared<S, A> {
    core: Mutex<Core<S, A>>,
    dispatcher: Dispatcher<A>,
    snapshot_tx: watch::Sender<Arc<S>>,
    subscribers: Arc<Mutex<Subscribers>>,
}

impl<S, A> Shared<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: ActionKind + Send + 'static,
{
    /// Apply every queued action, in the order it was sent
    fn apply_queued(&self, core: &mut Core<S, A>) -> usize {
        let mut applied = 0;
        while let Ok(action) = core.action_rx.try_recv() {
            self.dispatcher.taken();
            self.apply(core, &action);
            applied += 1;
        }
        applied
    }

    fn apply(&self, core: &mut Core<S, A>, action: &A) {
        for middleware in &mut core.middleware {
            if !middleware.handle(action, &core.state, &self.dispatcher) {
                log::debug!("Action {} consumed by middleware", action.kind());
                return;
            }
        }

        let next = {
            let _scope = self.dispatcher.reducing();
            core.reducer.reduce(S::clone(&core.state), action)
        };
        core.state = Arc::new(next);
        self.snapshot_tx.send_replace(Arc::clone(&core.state));

        self.notify_subscribers();
    }

    fn notify_subscribers(&self) {
        // Callbacks may subscribe or unsubscribe, so call them unlocked
        let callbacks: Vec<Callback> = self
            .subscribers
            .lock()
            .unwrap()
            .entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback();
        }
    }
}

impl<S, A> Drain for Shared<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: ActionKind + Send + 'static,
{
    fn drain(&self) -> usize {
        let mut applied = 0;
        loop {
            match self.core.try_lock() {
                Ok(mut core) => applied += self.apply_queued(&mut core),
                // The holder re-checks the queue before it returns
                Err(TryLockError::WouldBlock) => return applied,
                Err(TryLockError::Poisoned(_)) => {
                    log::error!("Store poisoned by a panicking reducer, dropping queued actions");
                    return applied;
                }
            }

            // Actions sent while the lock was held but after the queue ran dry
            if !self.dispatcher.has_pending() {
                return applied;
            }
        }
    }
}

/// Store - holds the current snapshot and runs the Redux loop
///
/// Dispatches are serialized under a single mutex. The owner dispatches
/// through `&mut self`; effects and middleware use a [`Dispatcher`], whose
/// actions are applied immediately when the store is idle and otherwise
/// right after the dispatch in progress. Either way they are applied in
/// the order they were sent.
///
/// Each dispatch:
/// 1. passes the action through the middleware chain,
/// 2. runs the reducer on a clone of the current state,
/// 3. replaces and publishes the snapshot,
/// 4. calls every subscriber,
/// 5. applies actions that were queued meanwhile.
pub struct Store<S, A> {
    shared: Arc<Shared<S, A>>,
}

impl<S, A> Store<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: ActionKind + Send + 'static,
{
    pub fn new<R>(initial_state: S, reducer: R) -> Self
    where
        R: Reducer<S, A> + Send + 'static,
    {
        let state = Arc::new(initial_state);
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, _) = watch::channel(Arc::clone(&state));

        let shared = Arc::new_cyclic(|weak: &Weak<Shared<S, A>>| {
            let drain: Weak<dyn Drain> = weak.clone();
            Shared {
                core: Mutex::new(Core {
                    state,
                    reducer: Box::new(reducer),
                    middleware: Vec::new(),
                    action_rx,
                }),
                dispatcher: Dispatcher::new(action_tx, drain),
                snapshot_tx,
                subscribers: Arc::default(),
            }
        });

        Self { shared }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware<S, A> + 'static>(&mut self, middleware: M) {
        self.shared
            .core
            .lock()
            .unwrap()
            .middleware
            .push(Box::new(middleware));
    }

    /// Get the current snapshot
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.shared.snapshot_tx.borrow())
    }

    /// Get a read-only handle that always sees the latest snapshot
    pub fn reader(&self) -> StateReader<S> {
        StateReader::new(self.shared.snapshot_tx.subscribe())
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.shared.dispatcher
    }

    /// Register a callback invoked after every committed transition
    ///
    /// Callbacks take no arguments; they read the new state through a
    /// [`StateReader`] or selectors.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut subscribers = self.shared.subscribers.lock().unwrap();
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.entries.push((id, Arc::new(callback)));

        Subscription {
            id,
            subscribers: Arc::downgrade(&self.shared.subscribers),
        }
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Actions queued before this one are applied first. Returns the action
    /// so callers can chain on it.
    pub fn dispatch(&mut self, action: A) -> A {
        {
            let mut core = self.shared.core.lock().unwrap();
            self.shared.apply_queued(&mut core);
            self.shared.apply(&mut core, &action);
            self.shared.apply_queued(&mut core);
        }
        self.shared.drain();
        action
    }

    /// Run an effect with this store's dispatcher and state reader
    ///
    /// The effect's result is returned as-is. Actions it dispatches are
    /// applied as they are dispatched, so the effect's state reader sees
    /// them straight away.
    pub fn dispatch_effect<E: Effect<S, A>>(&self, effect: E) -> E::Output {
        effect.run(self.shared.dispatcher.clone(), self.reader())
    }

    /// Apply actions still queued, returning how many were applied
    ///
    /// Only needed when a dispatch raced with another thread holding the
    /// store; the dispatch in progress normally picks those up itself.
    pub fn process_pending(&mut self) -> usize {
        self.shared.drain()
    }

    /// Drive `future` to completion, then apply anything still queued
    ///
    /// The caller observes the final state once this returns.
    pub async fn run_until<F: Future>(&mut self, future: F) -> F::Output {
        let output = future.await;
        self.process_pending();
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{BoxFuture, EffectOutcome};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::OnceLock;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Add(i32),
        Reset,
        Ignored,
    }

    impl ActionKind for Op {
        fn kind(&self) -> &'static str {
            match self {
                Op::Add(_) => "ADD",
                Op::Reset => "RESET",
                Op::Ignored => "IGNORED",
            }
        }
    }

    fn reduce(state: i32, action: &Op) -> i32 {
        match action {
            Op::Add(n) => state + n,
            Op::Reset => 0,
            Op::Ignored => state,
        }
    }

    #[test]
    fn test_store_dispatch_returns_action() {
        let mut store = Store::new(0, reduce);

        let returned = store.dispatch(Op::Add(2));

        assert_eq!(returned, Op::Add(2));
        assert_eq!(*store.state(), 2);
    }

    #[test]
    fn test_store_replaces_snapshot_on_dispatch() {
        let mut store = Store::new(1, reduce);
        let before = store.state();

        store.dispatch(Op::Add(1));

        assert_eq!(*before, 1);
        assert_eq!(*store.state(), 2);
        assert!(!Arc::ptr_eq(&before, &store.state()));
    }

    #[test]
    fn test_reader_sees_latest_snapshot() {
        let mut store = Store::new(0, reduce);
        let reader = store.reader();

        store.dispatch(Op::Add(5));
        store.dispatch(Op::Add(5));

        assert_eq!(*reader.get(), 10);
    }

    #[test]
    fn test_subscribers_called_after_each_dispatch() {
        let mut store = Store::new(0, reduce);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _subscription = store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(Op::Add(1));
        store.dispatch(Op::Ignored);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_subscriber_reads_committed_state() {
        let mut store = Store::new(0, reduce);
        let reader = store.reader();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let _subscription = store.subscribe(move || log.lock().unwrap().push(*reader.get()));

        store.dispatch(Op::Add(3));
        store.dispatch(Op::Reset);

        assert_eq!(*seen.lock().unwrap(), vec![3, 0]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = Store::new(0, reduce);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(Op::Add(1));
        subscription.unsubscribe();
        store.dispatch(Op::Add(1));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    struct BlockResets;

    impl Middleware<i32, Op> for BlockResets {
        fn handle(&mut self, action: &Op, _state: &i32, _dispatcher: &Dispatcher<Op>) -> bool {
            !matches!(action, Op::Reset)
        }
    }

    #[test]
    fn test_middleware_can_consume_action() {
        let mut store = Store::new(0, reduce);
        store.add_middleware(BlockResets);

        store.dispatch(Op::Add(4));
        store.dispatch(Op::Reset);

        assert_eq!(*store.state(), 4);
    }

    struct DoubleAdds;

    impl Middleware<i32, Op> for DoubleAdds {
        fn handle(&mut self, action: &Op, _state: &i32, dispatcher: &Dispatcher<Op>) -> bool {
            if let Op::Add(n) = action {
                if *n > 0 {
                    dispatcher.dispatch(Op::Add(-n));
                }
            }
            true
        }
    }

    #[test]
    fn test_middleware_follow_up_actions_are_applied() {
        let mut store = Store::new(0, reduce);
        store.add_middleware(DoubleAdds);

        store.dispatch(Op::Add(7));

        assert_eq!(*store.state(), 0);
    }

    #[test]
    fn test_dispatcher_applies_actions_in_submission_order() {
        let mut store = Store::new(1, reduce);
        let dispatcher = store.dispatcher().clone();

        dispatcher.dispatch(Op::Add(2));
        assert_eq!(*store.state(), 3);

        dispatcher.dispatch(Op::Reset);
        dispatcher.dispatch(Op::Add(9));

        assert_eq!(*store.state(), 9);
        assert_eq!(store.process_pending(), 0);
    }

    #[test]
    fn test_dispatch_from_other_thread_is_applied() {
        let mut store = Store::new(0, reduce);
        let remote = store.dispatcher().clone();

        std::thread::spawn(move || {
            remote.dispatch(Op::Add(5));
            remote.dispatch(Op::Add(1));
        })
        .join()
        .unwrap();

        assert_eq!(*store.state(), 6);
        assert_eq!(store.process_pending(), 0);
    }

    #[test]
    fn test_subscriber_dispatch_runs_after_current_action() {
        let mut store = Store::new(0, reduce);
        let dispatcher = store.dispatcher().clone();
        let reader = store.reader();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let _subscription = store.subscribe(move || {
            let current = *reader.get();
            log.lock().unwrap().push(current);
            if current == 1 {
                dispatcher.dispatch(Op::Add(10));
            }
        });

        store.dispatch(Op::Add(1));

        assert_eq!(*seen.lock().unwrap(), vec![1, 11]);
        assert_eq!(*store.state(), 11);
    }

    #[test]
    #[should_panic(expected = "reentrant dispatch")]
    fn test_reentrant_dispatch_from_reducer_panics() {
        let slot: Arc<OnceLock<Dispatcher<Op>>> = Arc::new(OnceLock::new());
        let inner = Arc::clone(&slot);
        let mut store = Store::new(0, move |state: i32, action: &Op| {
            if let Some(dispatcher) = inner.get() {
                dispatcher.dispatch(Op::Reset);
            }
            reduce(state, action)
        });
        slot.set(store.dispatcher().clone()).ok();

        store.dispatch(Op::Add(1));
    }

    #[test]
    fn test_dispatch_effect_passes_dispatcher_and_state() {
        let store = Store::new(10, reduce);

        let seen = store.dispatch_effect(|dispatcher: Dispatcher<Op>, state: StateReader<i32>| {
            let current = *state.get();
            dispatcher.dispatch(Op::Add(current));
            current
        });

        assert_eq!(seen, 10);
        assert_eq!(*store.state(), 20);
    }

    #[test]
    fn test_effect_reads_state_after_its_own_dispatch() {
        let mut store = Store::new(0, reduce);

        let seen = store.dispatch_effect(|dispatcher: Dispatcher<Op>, state: StateReader<i32>| {
            dispatcher.dispatch(Op::Add(1));
            *state.get()
        });

        assert_eq!(seen, 1);
        assert_eq!(*store.state(), 1);
        assert_eq!(store.process_pending(), 0);
    }

    #[tokio::test]
    async fn test_run_until_applies_effect_actions() {
        let mut store = Store::new(0, reduce);

        let pending: BoxFuture<'static, EffectOutcome> = store.dispatch_effect(
            |dispatcher: Dispatcher<Op>, state: StateReader<i32>| -> BoxFuture<'static, EffectOutcome> {
                dispatcher.dispatch(Op::Add(1));
                Box::pin(async move {
                    tokio::task::yield_now().await;
                    let current = *state.get();
                    dispatcher.dispatch(Op::Add(current * 10));
                    EffectOutcome::Succeeded
                })
            },
        );

        let outcome = store.run_until(pending).await;

        assert!(outcome.is_success());
        assert_eq!(*store.state(), 11);
    }
}
