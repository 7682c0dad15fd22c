use super::Collection;
use crate::domain_models::{Product, ProductType, Provider, Shop};

/// Application state - one branch per feature
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub products: Collection<Product>,
    pub product_types: Collection<ProductType>,
    pub stores: Collection<Shop>,
    pub providers: Collection<Provider>,
}
