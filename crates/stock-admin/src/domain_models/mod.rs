//! Domain models for the stock API
//!
//! Each entity carries a numeric `id`, the fields the client works with,
//! and every other field the server sends in `attributes`, so records
//! round-trip through create/update without losing data.

pub mod product;
pub mod product_type;
pub mod provider;
pub mod shop;

pub use product::Product;
pub use product_type::ProductType;
pub use provider::Provider;
pub use shop::Shop;

/// Identifier shared by all stock entities
pub type RecordId = i64;
