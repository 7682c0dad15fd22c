use super::collection_reducer::reduce_collection;
use crate::actions::Action;
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each action to its feature slice
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Product(action) => {
            state.products = reduce_collection(state.products, action);
        }
        Action::ProductType(action) => {
            state.product_types = reduce_collection(state.product_types, action);
        }
        Action::Store(action) => {
            state.stores = reduce_collection(state.stores, action);
        }
        Action::Provider(action) => {
            state.providers = reduce_collection(state.providers, action);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CollectionAction;
    use crate::domain_models::{Product, Shop};
    use serde_json::Map;
    use std::sync::Arc;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            product_type_id: None,
            provider_id: None,
            attributes: Map::new(),
        }
    }

    #[test]
    fn test_routes_to_feature_slice() {
        let state = reduce(
            AppState::default(),
            &Action::Product(CollectionAction::Set(vec![product(1, "Hammer")])),
        );

        assert_eq!(state.products.items.len(), 1);
        assert!(state.stores.items.is_empty());
    }

    #[test]
    fn test_other_slices_keep_their_instances() {
        let initial = AppState::default();
        let stores_before = Arc::clone(&initial.stores.items);
        let types_before = Arc::clone(&initial.product_types.items);

        let state = reduce(
            initial,
            &Action::Product(CollectionAction::Create(product(1, "Saw"))),
        );

        assert!(Arc::ptr_eq(&stores_before, &state.stores.items));
        assert!(Arc::ptr_eq(&types_before, &state.product_types.items));
    }

    #[test]
    fn test_removing_unknown_id_keeps_state_equal() {
        let initial = AppState::default();
        let state = reduce(initial.clone(), &Action::Provider(CollectionAction::Remove(42)));
        assert_eq!(state, initial);
    }

    #[test]
    fn test_store_actions_reach_store_slice() {
        let shop = Shop {
            id: 4,
            name: "Main street".to_string(),
            address: None,
            attributes: Map::new(),
        };

        let state = reduce(AppState::default(), &Action::Store(CollectionAction::Create(shop)));
        let state = reduce(state, &Action::Store(CollectionAction::Loading(true)));

        assert_eq!(state.stores.items[0].id, 4);
        assert!(state.stores.loading);
        assert!(!state.products.loading);
    }
}
