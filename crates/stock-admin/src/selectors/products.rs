use crate::domain_models::{Product, ProductType, RecordId};
use crate::features::Products;
use crate::state::AppState;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use stock_store::Memoized;

pub fn get_loading(state: &AppState) -> bool {
    super::is_loading::<Products>(state)
}

pub fn get_products(state: &AppState) -> Arc<Vec<Product>> {
    super::items::<Products>(state)
}

pub fn get_product_by_id(state: &AppState, id: RecordId) -> Option<&Product> {
    super::find_by_id::<Products>(state, id)
}

/// Product joined with the name of its product type, for list output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: RecordId,
    pub name: String,
    pub product_type: Option<String>,
}

type RowsKey = (Arc<Vec<Product>>, Arc<Vec<ProductType>>);

pub type ProductRowsSelector = Memoized<AppState, RowsKey, Vec<ProductRow>>;

/// Memoized selector for [`ProductRow`]s
///
/// Recomputes only when the product or product type list is replaced.
pub fn make_get_product_rows() -> ProductRowsSelector {
    Memoized::new(
        |state: &AppState| {
            (
                Arc::clone(&state.products.items),
                Arc::clone(&state.product_types.items),
            )
        },
        |(products, product_types): &RowsKey| {
            let type_names: HashMap<RecordId, &str> = product_types
                .iter()
                .map(|product_type| (product_type.id, product_type.name.as_str()))
                .collect();

            products
                .iter()
                .map(|product| ProductRow {
                    id: product.id,
                    name: product.name.clone(),
                    product_type: product
                        .product_type_id
                        .and_then(|id| type_names.get(&id))
                        .map(|name| name.to_string()),
                })
                .collect()
        },
    )
}
