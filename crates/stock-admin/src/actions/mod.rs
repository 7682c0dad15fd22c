//! Actions module
//!
//! The root `Action` enum is tagged by feature. Each feature variant wraps
//! a [`CollectionAction`] for that feature's record type, and the root
//! reducer routes on the tag with an exhaustive match.

pub mod collection;

pub use collection::{ActionTypes, CollectionAction};

use crate::domain_models::{Product, ProductType, Provider, Shop};
use stock_store::ActionKind;

pub const PRODUCT: ActionTypes = ActionTypes {
    loading: "PRODUCT_LOADING",
    set: "PRODUCT_SET",
    create: "PRODUCT_CREATE",
    update: "PRODUCT_UPDATE",
    remove: "PRODUCT_REMOVE",
};

pub const PRODUCT_TYPE: ActionTypes = ActionTypes {
    loading: "PRODUCT_TYPE_LOADING",
    set: "PRODUCT_TYPE_SET",
    create: "PRODUCT_TYPE_CREATE",
    update: "PRODUCT_TYPE_UPDATE",
    remove: "PRODUCT_TYPE_REMOVE",
};

pub const STORE: ActionTypes = ActionTypes {
    loading: "STORE_LOADING",
    set: "STORE_SET",
    create: "STORE_CREATE",
    update: "STORE_UPDATE",
    remove: "STORE_REMOVE",
};

pub const PROVIDER: ActionTypes = ActionTypes {
    loading: "PROVIDER_LOADING",
    set: "PROVIDER_SET",
    create: "PROVIDER_CREATE",
    update: "PROVIDER_UPDATE",
    remove: "PROVIDER_REMOVE",
};

/// Root action enum - tagged by feature
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Product list actions
    Product(CollectionAction<Product>),
    /// Product type list actions
    ProductType(CollectionAction<ProductType>),
    /// Store list actions
    Store(CollectionAction<Shop>),
    /// Provider list actions
    Provider(CollectionAction<Provider>),
}

impl ActionKind for Action {
    fn kind(&self) -> &'static str {
        match self {
            Action::Product(action) => action.kind(&PRODUCT),
            Action::ProductType(action) => action.kind(&PRODUCT_TYPE),
            Action::Store(action) => action.kind(&STORE),
            Action::Provider(action) => action.kind(&PROVIDER),
        }
    }
}
