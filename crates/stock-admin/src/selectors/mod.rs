//! Selectors - read projections over [`AppState`]
//!
//! The generic selectors work for any [`Feature`]; product specific ones,
//! including the memoized product rows, live in [`products`].

pub mod products;

use crate::domain_models::RecordId;
use crate::features::{Feature, ProductTypes, Providers, Stores};
use crate::state::AppState;
use std::sync::Arc;
use stock_store::Record;

pub fn is_loading<F: Feature>(state: &AppState) -> bool {
    F::slice(state).loading
}

/// The feature's items, sharing the instance held by the state
pub fn items<F: Feature>(state: &AppState) -> Arc<Vec<F::Record>> {
    Arc::clone(&F::slice(state).items)
}

pub fn find_by_id<F: Feature>(state: &AppState, id: RecordId) -> Option<&F::Record> {
    F::slice(state).find(&id)
}

/// Id of the first record that is new or different compared to `before`
///
/// Used after a write to find the record the server stored.
pub fn first_changed_id<F: Feature>(before: &[F::Record], state: &AppState) -> Option<RecordId> {
    F::slice(state)
        .items
        .iter()
        .find(|record| !before.contains(record))
        .map(|record| *record.id())
}

/// True while any feature has a request in flight
pub fn any_loading(state: &AppState) -> bool {
    products::get_loading(state)
        || is_loading::<ProductTypes>(state)
        || is_loading::<Stores>(state)
        || is_loading::<Providers>(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Products;
    use crate::state::Collection;
    use crate::test_support::product;

    #[test]
    fn test_generic_selectors_read_feature_slice() {
        let state = AppState {
            products: Collection::with_items(vec![product(1, "A"), product(2, "B")]),
            ..AppState::default()
        };

        assert_eq!(items::<Products>(&state).len(), 2);
        assert!(Arc::ptr_eq(&items::<Products>(&state), &state.products.items));
        assert_eq!(find_by_id::<Products>(&state, 2).map(|p| p.name.as_str()), Some("B"));
        assert!(find_by_id::<Products>(&state, 9).is_none());
        assert!(items::<Providers>(&state).is_empty());
    }

    #[test]
    fn test_first_changed_id_finds_new_or_replaced_record() {
        let before = vec![product(1, "A"), product(2, "B")];
        let mut state = AppState {
            products: Collection::with_items(before.clone()),
            ..AppState::default()
        };
        assert_eq!(first_changed_id::<Products>(&before, &state), None);

        state.products = Collection::with_items(vec![product(1, "A"), product(2, "B2")]);
        assert_eq!(first_changed_id::<Products>(&before, &state), Some(2));

        state.products = Collection::with_items(vec![product(1, "A"), product(2, "B"), product(3, "C")]);
        assert_eq!(first_changed_id::<Products>(&before, &state), Some(3));
    }

    #[test]
    fn test_any_loading() {
        let mut state = AppState::default();
        assert!(!any_loading(&state));

        state.providers.loading = true;
        assert!(any_loading(&state));

        state.providers.loading = false;
        state.products.loading = true;
        assert!(any_loading(&state));
        state.products.loading = false;
        state.providers.loading = true;
        assert!(is_loading::<Providers>(&state));
        assert!(!is_loading::<Products>(&state));
    }
}
