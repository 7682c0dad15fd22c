//! Selectors - read projections over state
//!
//! A selector is any `Fn(&S) -> O`. [`Memoized`] adds a one-entry cache:
//! it extracts a key (usually an `Arc` slice of the state) and only
//! recomputes when the key is not the same as the cached one.
//!
//! The cache holds exactly one entry, so callers that alternate between
//! different slices recompute every time. That costs time, never
//! correctness.

use std::sync::{Arc, Mutex};

/// Pure projection from state to a derived value
pub trait Selector<S> {
    type Output;

    fn select(&self, state: &S) -> Self::Output;
}

impl<S, O, F> Selector<S> for F
where
    F: Fn(&S) -> O,
{
    type Output = O;

    fn select(&self, state: &S) -> O {
        self(state)
    }
}

/// Explicit identity check used as the memoization key
pub trait SliceKey {
    fn is_same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SliceKey for Arc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<A: SliceKey, B: SliceKey> SliceKey for (A, B) {
    fn is_same(&self, other: &Self) -> bool {
        self.0.is_same(&other.0) && self.1.is_same(&other.1)
    }
}

type KeyFn<S, K> = Box<dyn Fn(&S) -> K + Send + Sync>;
type ComputeFn<K, O> = Box<dyn Fn(&K) -> O + Send + Sync>;

/// Selector with a cache of size one
pub struct Memoized<S, K, O> {
    key: KeyFn<S, K>,
    compute: ComputeFn<K, O>,
    cache: Mutex<Option<(K, Arc<O>)>>,
}

impl<S, K: SliceKey, O> Memoized<S, K, O> {
    /// Create a memoized selector
    ///
    /// - `key`: extracts the slice the output depends on
    /// - `compute`: derives the output from that slice
    pub fn new<KF, CF>(key: KF, compute: CF) -> Self
    where
        KF: Fn(&S) -> K + Send + Sync + 'static,
        CF: Fn(&K) -> O + Send + Sync + 'static,
    {
        Self {
            key: Box::new(key),
            compute: Box::new(compute),
            cache: Mutex::new(None),
        }
    }

    /// Return the cached output if the key is unchanged, recompute otherwise
    pub fn select(&self, state: &S) -> Arc<O> {
        let key = (self.key)(state);
        let mut cache = self.cache.lock().unwrap();

        if let Some((cached_key, value)) = cache.as_ref() {
            if cached_key.is_same(&key) {
                return Arc::clone(value);
            }
        }

        let value = Arc::new((self.compute)(&key));
        *cache = Some((key, Arc::clone(&value)));
        value
    }
}

impl<S, K: SliceKey, O> Selector<S> for Memoized<S, K, O> {
    type Output = Arc<O>;

    fn select(&self, state: &S) -> Arc<O> {
        Memoized::select(self, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone)]
    struct State {
        names: Arc<Vec<String>>,
        counter: u32,
    }

    fn state(names: &[&str]) -> State {
        State {
            names: Arc::new(names.iter().map(|n| n.to_string()).collect()),
            counter: 0,
        }
    }

    #[test]
    fn test_plain_function_is_a_selector() {
        fn counter(state: &State) -> u32 {
            state.counter
        }

        assert_eq!(counter.select(&state(&[])), 0);
    }

    #[test]
    fn test_memoized_returns_cached_instance_for_same_slice() {
        let selector = Memoized::new(
            |s: &State| Arc::clone(&s.names),
            |names: &Arc<Vec<String>>| names.join(","),
        );
        let mut s = state(&["a", "b"]);

        let first = selector.select(&s);
        s.counter += 1; // unrelated change keeps the slice
        let second = selector.select(&s);

        assert_eq!(*first, "a,b");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_memoized_recomputes_after_slice_change() {
        let computed = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&computed);
        let selector = Memoized::new(
            |s: &State| Arc::clone(&s.names),
            move |names: &Arc<Vec<String>>| {
                count.fetch_add(1, Ordering::SeqCst);
                names.len()
            },
        );

        let s1 = state(&["a"]);
        let first = selector.select(&s1);
        selector.select(&s1);

        // Same contents in a new allocation still counts as a change
        let s2 = state(&["a"]);
        let second = selector.select(&s2);

        assert_eq!(computed.load(Ordering::SeqCst), 2);
        assert_eq!(*first, *second);
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_memoized_cache_holds_one_entry() {
        let computed = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&computed);
        let selector = Memoized::new(
            |s: &State| Arc::clone(&s.names),
            move |names: &Arc<Vec<String>>| {
                count.fetch_add(1, Ordering::SeqCst);
                names.len()
            },
        );
        let a = state(&["a"]);
        let b = state(&["b", "c"]);

        selector.select(&a);
        selector.select(&b);
        selector.select(&a);

        assert_eq!(computed.load(Ordering::SeqCst), 3);
    }

    fn select_twice<Sel: Selector<State>>(selector: &Sel, state: &State) -> (Sel::Output, Sel::Output) {
        (selector.select(state), selector.select(state))
    }

    #[test]
    fn test_memoized_is_a_selector_sharing_its_cache() {
        let selector = Memoized::new(
            |s: &State| Arc::clone(&s.names),
            |names: &Arc<Vec<String>>| names.len(),
        );
        let s = state(&["a", "b"]);

        let (first, second) = select_twice(&selector, &s);

        assert_eq!(*first, 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &selector.select(&s)));
    }

    #[test]
    fn test_tuple_keys_compare_each_part() {
        let x = Arc::new(1);
        let y = Arc::new(2);

        assert!((Arc::clone(&x), Arc::clone(&y)).is_same(&(Arc::clone(&x), Arc::clone(&y))));
        assert!(!(Arc::clone(&x), Arc::clone(&y)).is_same(&(Arc::clone(&x), Arc::new(2))));
    }
}
