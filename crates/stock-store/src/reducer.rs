/// Reducer - pure function that produces new state from current state + action
///
/// Implementations must not perform I/O and must be deterministic: the
/// same `(state, action)` pair always yields the same result. Actions a
/// reducer does not handle return the state unchanged.
///
/// Any `Fn(S, &A) -> S` is a reducer, so plain functions such as
/// `fn reduce(state: AppState, action: &Action) -> AppState` plug straight
/// into [`Store::new`](crate::Store::new).
pub trait Reducer<S, A> {
    fn reduce(&self, state: S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &A) -> S,
{
    fn reduce(&self, state: S, action: &A) -> S {
        self(state, action)
    }
}
