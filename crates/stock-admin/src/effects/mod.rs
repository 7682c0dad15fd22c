//! Effects - async action creators for the feature slices
//!
//! Every effect follows the same sequence:
//!
//! ```text
//! LOADING(true) → API call → success: payload action(s), LOADING(false)
//!                          → failure: notify, LOADING(false)
//! ```
//!
//! Failures never escape the effect; the returned future resolves to an
//! [`EffectOutcome`] instead. Overlapping effects on one feature are not
//! coordinated, so the loading flag is last-write-wins.

pub mod collection_effects;

pub use collection_effects::{create, fetch_all, fetch_by_filters, fetch_by_id, remove, update};

use crate::notifier::Notifier;
use std::sync::Arc;
use stock_client::StockApi;
use stock_store::{BoxFuture, EffectOutcome};

/// Future returned by every effect in this module
pub type PendingEffect = BoxFuture<'static, EffectOutcome>;

/// Collaborators shared by all effects
#[derive(Clone)]
pub struct EffectContext {
    pub api: Arc<dyn StockApi>,
    pub notifier: Arc<dyn Notifier>,
}

impl EffectContext {
    pub fn new(api: Arc<dyn StockApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }
}
