//! Collection effects, generic over [`Feature`]

use super::{EffectContext, PendingEffect};
use crate::actions::{Action, CollectionAction};
use crate::domain_models::RecordId;
use crate::features::Feature;
use crate::state::AppState;
use serde_json::{Map, Value};
use std::future::Future;
use std::sync::Arc;
use stock_client::{ApiError, Resource, StockApi};
use stock_store::{Dispatcher, EffectOutcome, Record, StateReader};

/// Wrap one API request in the loading / notify protocol
///
/// `on_success` turns the response into the actions to dispatch; it gets
/// the latest snapshot so it can decide between actions.
fn request_effect<F, Req, Fut, T, OnOk>(
    ctx: EffectContext,
    description: String,
    request: Req,
    on_success: OnOk,
) -> impl FnOnce(Dispatcher<Action>, StateReader<AppState>) -> PendingEffect
where
    F: Feature,
    Req: FnOnce(Arc<dyn StockApi>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    T: Send + 'static,
    OnOk: FnOnce(T, &AppState) -> Vec<CollectionAction<F::Record>> + Send + 'static,
{
    move |dispatcher: Dispatcher<Action>, state: StateReader<AppState>| -> PendingEffect {
        dispatcher.dispatch(F::wrap(CollectionAction::Loading(true)));

        Box::pin(async move {
            let outcome = match request(Arc::clone(&ctx.api)).await {
                Ok(response) => {
                    let snapshot = state.get();
                    for action in on_success(response, snapshot.as_ref()) {
                        dispatcher.dispatch(F::wrap(action));
                    }
                    log::debug!("{} succeeded", description);
                    EffectOutcome::Succeeded
                }
                Err(error) => {
                    log::warn!("{} failed: {}", description, error);
                    ctx.notifier.notify(&error);
                    EffectOutcome::Failed
                }
            };

            dispatcher.dispatch(F::wrap(CollectionAction::Loading(false)));
            outcome
        })
    }
}

/// Load every record of the feature (`GET /{feature}`)
pub fn fetch_all<F: Feature>(
    ctx: EffectContext,
) -> impl FnOnce(Dispatcher<Action>, StateReader<AppState>) -> PendingEffect {
    request_effect::<F, _, _, _, _>(
        ctx,
        format!("Fetching {}", F::NAME),
        |api: Arc<dyn StockApi>| async move {
            Resource::new(api.as_ref(), F::PATH)
                .list::<F::Record>()
                .await
        },
        |records: Vec<F::Record>, _: &AppState| vec![CollectionAction::Set(records)],
    )
}

/// Replace the items with the records matching `filters`
/// (`POST /{feature}/search`, empty filters dropped)
pub fn fetch_by_filters<F: Feature>(
    ctx: EffectContext,
    filters: Map<String, Value>,
) -> impl FnOnce(Dispatcher<Action>, StateReader<AppState>) -> PendingEffect {
    request_effect::<F, _, _, _, _>(
        ctx,
        format!("Searching {}", F::NAME),
        move |api: Arc<dyn StockApi>| async move {
            Resource::new(api.as_ref(), F::PATH)
                .search::<F::Record>(filters)
                .await
        },
        |records: Vec<F::Record>, _: &AppState| vec![CollectionAction::Set(records)],
    )
}

/// Load one record (`GET /{feature}/{id}`) and merge it into the items
///
/// Known ids are updated in place, unknown ids are appended.
pub fn fetch_by_id<F: Feature>(
    ctx: EffectContext,
    id: RecordId,
) -> impl FnOnce(Dispatcher<Action>, StateReader<AppState>) -> PendingEffect {
    request_effect::<F, _, _, _, _>(
        ctx,
        format!("Fetching {} {}", F::NAME, id),
        move |api: Arc<dyn StockApi>| async move {
            Resource::new(api.as_ref(), F::PATH)
                .get::<F::Record>(id)
                .await
        },
        |record: F::Record, state: &AppState| {
            if F::slice(state).contains(record.id()) {
                vec![CollectionAction::Update(record)]
            } else {
                vec![CollectionAction::Create(record)]
            }
        },
    )
}

/// Create a record (`POST /{feature}`) and append the stored version
pub fn create<F: Feature>(
    ctx: EffectContext,
    record: F::Record,
) -> impl FnOnce(Dispatcher<Action>, StateReader<AppState>) -> PendingEffect {
    request_effect::<F, _, _, _, _>(
        ctx,
        format!("Creating {}", F::NAME),
        move |api: Arc<dyn StockApi>| async move {
            Resource::new(api.as_ref(), F::PATH).create(&record).await
        },
        |stored: F::Record, _: &AppState| vec![CollectionAction::Create(stored)],
    )
}

/// Update a record (`PUT /{feature}/{id}`) and replace it in the items
pub fn update<F: Feature>(
    ctx: EffectContext,
    record: F::Record,
) -> impl FnOnce(Dispatcher<Action>, StateReader<AppState>) -> PendingEffect {
    let id = *record.id();
    request_effect::<F, _, _, _, _>(
        ctx,
        format!("Updating {} {}", F::NAME, id),
        move |api: Arc<dyn StockApi>| async move {
            Resource::new(api.as_ref(), F::PATH)
                .update(id, &record)
                .await
        },
        |stored: F::Record, _: &AppState| vec![CollectionAction::Update(stored)],
    )
}

/// Delete a record (`DELETE /{feature}/{id}`) and drop it from the items
pub fn remove<F: Feature>(
    ctx: EffectContext,
    id: RecordId,
) -> impl FnOnce(Dispatcher<Action>, StateReader<AppState>) -> PendingEffect {
    request_effect::<F, _, _, _, _>(
        ctx,
        format!("Removing {} {}", F::NAME, id),
        move |api: Arc<dyn StockApi>| async move {
            Resource::new(api.as_ref(), F::PATH).remove(id).await
        },
        move |_: (), _: &AppState| vec![CollectionAction::Remove(id)],
    )
}
