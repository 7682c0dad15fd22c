//! Feature descriptors
//!
//! A feature ties together a record type, its API resource path, its
//! branch of [`AppState`] and its variant of [`Action`]. Effects and
//! selectors are written once, generic over `Feature`.

use crate::actions::{Action, CollectionAction};
use crate::domain_models::{Product, ProductType, Provider, RecordId, Shop};
use crate::state::{AppState, Collection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use stock_store::Record;

pub trait Feature: Send + Sync + 'static {
    type Record: Record<Id = RecordId> + Serialize + DeserializeOwned + Debug + PartialEq;

    /// Human readable plural, used in log and CLI output
    const NAME: &'static str;

    /// API resource path, e.g. `product`
    const PATH: &'static str;

    fn wrap(action: CollectionAction<Self::Record>) -> Action;

    fn slice(state: &AppState) -> &Collection<Self::Record>;
}

pub struct Products;

impl Feature for Products {
    type Record = Product;
    const NAME: &'static str = "products";
    const PATH: &'static str = "product";

    fn wrap(action: CollectionAction<Product>) -> Action {
        Action::Product(action)
    }

    fn slice(state: &AppState) -> &Collection<Product> {
        &state.products
    }
}

pub struct ProductTypes;

impl Feature for ProductTypes {
    type Record = ProductType;
    const NAME: &'static str = "product types";
    const PATH: &'static str = "productType";

    fn wrap(action: CollectionAction<ProductType>) -> Action {
        Action::ProductType(action)
    }

    fn slice(state: &AppState) -> &Collection<ProductType> {
        &state.product_types
    }
}

pub struct Stores;

impl Feature for Stores {
    type Record = Shop;
    const NAME: &'static str = "stores";
    const PATH: &'static str = "store";

    fn wrap(action: CollectionAction<Shop>) -> Action {
        Action::Store(action)
    }

    fn slice(state: &AppState) -> &Collection<Shop> {
        &state.stores
    }
}

pub struct Providers;

impl Feature for Providers {
    type Record = Provider;
    const NAME: &'static str = "providers";
    const PATH: &'static str = "provider";

    fn wrap(action: CollectionAction<Provider>) -> Action {
        Action::Provider(action)
    }

    fn slice(state: &AppState) -> &Collection<Provider> {
        &state.providers
    }
}
