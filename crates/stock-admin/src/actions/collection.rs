//! Collection actions
//!
//! Every feature slice (products, product types, stores, providers) is a
//! list of records with a loading flag, so they share one action type.

use stock_store::Record;

/// Actions for a record collection
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionAction<R: Record> {
    /// Set the loading flag (last write wins)
    Loading(bool),
    /// Replace all items with the given records
    Set(Vec<R>),
    /// Append a newly created record
    Create(R),
    /// Replace the record with the same id
    Update(R),
    /// Remove the record with this id
    Remove(R::Id),
}

/// Action type names of one feature
#[derive(Debug, Clone, Copy)]
pub struct ActionTypes {
    pub loading: &'static str,
    pub set: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub remove: &'static str,
}

impl<R: Record> CollectionAction<R> {
    pub fn kind(&self, types: &ActionTypes) -> &'static str {
        match self {
            CollectionAction::Loading(_) => types.loading,
            CollectionAction::Set(_) => types.set,
            CollectionAction::Create(_) => types.create,
            CollectionAction::Update(_) => types.update,
            CollectionAction::Remove(_) => types.remove,
        }
    }
}
