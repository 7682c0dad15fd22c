//! Collection Reducer
//!
//! Shared by every feature slice. All transitions build new vectors; the
//! previous snapshot's items are never touched.

use crate::actions::CollectionAction;
use crate::state::Collection;
use std::sync::Arc;
use stock_store::Record;

pub fn reduce_collection<R: Record>(
    mut state: Collection<R>,
    action: &CollectionAction<R>,
) -> Collection<R> {
    match action {
        CollectionAction::Loading(loading) => {
            state.loading = *loading;
        }

        CollectionAction::Set(items) => {
            state.items = Arc::new(items.clone());
            log::debug!("Set {} items", items.len());
        }

        CollectionAction::Create(record) => {
            // Ids stay unique: a create for a known id replaces that record
            let mut items = state.items.as_ref().clone();
            match items.iter().position(|r| r.id() == record.id()) {
                Some(idx) => {
                    log::warn!("Create: record {} already present, replacing it", record.id());
                    items[idx] = record.clone();
                }
                None => items.push(record.clone()),
            }
            state.items = Arc::new(items);
        }

        CollectionAction::Update(record) => {
            let Some(idx) = state.items.iter().position(|r| r.id() == record.id()) else {
                log::debug!("Update: record {} not found, state unchanged", record.id());
                return state;
            };
            let mut items = state.items.as_ref().clone();
            items[idx] = record.clone();
            state.items = Arc::new(items);
        }

        CollectionAction::Remove(id) => {
            if !state.items.iter().any(|r| r.id() == id) {
                log::debug!("Remove: record {} not found, state unchanged", id);
                return state;
            }
            let items = state
                .items
                .iter()
                .filter(|r| r.id() != id)
                .cloned()
                .collect();
            state.items = Arc::new(items);
        }
    }
    state
}
