//! Command execution - the binding layer between CLI and store
//!
//! Each command dispatches its effect, drives the store until the effect
//! completes and prints the resulting state through selectors.

use crate::actions::Action;
use crate::cli::{filters_to_map, parse_record, Command, FeatureArg};
use crate::effects::{self, EffectContext, PendingEffect};
use crate::features::{Feature, ProductTypes, Products, Providers, Stores};
use crate::selectors::products::{self, make_get_product_rows, ProductRow, ProductRowsSelector};
use crate::selectors;
use crate::state::AppState;
use crate::store::AppStore;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use stock_store::{Dispatcher, EffectOutcome, Record, StateReader};

/// The store together with the selectors that live as long as it does
pub struct Session {
    pub store: AppStore,
    product_rows: ProductRowsSelector,
}

impl Session {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            product_rows: make_get_product_rows(),
        }
    }

    /// Product rows of the current state, cached while products and
    /// product types are unchanged
    pub fn product_rows(&self) -> Arc<Vec<ProductRow>> {
        self.product_rows.select(&self.store.state())
    }
}

pub async fn run(
    command: Command,
    session: &mut Session,
    ctx: EffectContext,
    out: &mut dyn Write,
) -> Result<EffectOutcome> {
    match command.feature() {
        FeatureArg::Product => run_products(command, session, ctx, out).await,
        FeatureArg::ProductType => {
            run_for::<ProductTypes>(command, &mut session.store, ctx, out).await
        }
        FeatureArg::Store => run_for::<Stores>(command, &mut session.store, ctx, out).await,
        FeatureArg::Provider => run_for::<Providers>(command, &mut session.store, ctx, out).await,
    }
}

/// Products print through the product selectors; writes go the generic way
async fn run_products(
    command: Command,
    session: &mut Session,
    ctx: EffectContext,
    out: &mut dyn Write,
) -> Result<EffectOutcome> {
    match command {
        Command::List { .. } => list_products(session, ctx, out).await,
        Command::Show { id, .. } => {
            let outcome = drive(&mut session.store, effects::fetch_by_id::<Products>(ctx, id)).await;
            if outcome.is_success() {
                print_json(out, &products::get_product_by_id(&session.store.state(), id))?;
            }
            Ok(outcome)
        }
        Command::Search { filters, .. } => {
            let filters = filters_to_map(&filters);
            let outcome = drive(
                &mut session.store,
                effects::fetch_by_filters::<Products>(ctx, filters),
            )
            .await;
            if outcome.is_success() {
                print_json(out, &*products::get_products(&session.store.state()))?;
            }
            Ok(outcome)
        }
        command => run_for::<Products>(command, &mut session.store, ctx, out).await,
    }
}

async fn run_for<F: Feature>(
    command: Command,
    store: &mut AppStore,
    ctx: EffectContext,
    out: &mut dyn Write,
) -> Result<EffectOutcome> {
    match command {
        Command::List { .. } => {
            let outcome = drive(store, effects::fetch_all::<F>(ctx)).await;
            if outcome.is_success() {
                print_json(out, &*selectors::items::<F>(&store.state()))?;
            }
            Ok(outcome)
        }
        Command::Show { id, .. } => {
            let outcome = drive(store, effects::fetch_by_id::<F>(ctx, id)).await;
            if outcome.is_success() {
                print_json(out, &selectors::find_by_id::<F>(&store.state(), id))?;
            }
            Ok(outcome)
        }
        Command::Search { filters, .. } => {
            let filters = filters_to_map(&filters);
            let outcome = drive(store, effects::fetch_by_filters::<F>(ctx, filters)).await;
            if outcome.is_success() {
                print_json(out, &*selectors::items::<F>(&store.state()))?;
            }
            Ok(outcome)
        }
        Command::Create { json, .. } => {
            let record: F::Record = parse_record(&json)?;
            let submitted = *record.id();
            let before = selectors::items::<F>(&store.state());

            let outcome = drive(store, effects::create::<F>(ctx, record)).await;
            if outcome.is_success() {
                // The server may assign the id, so look for the record that changed
                let state = store.state();
                let id = selectors::first_changed_id::<F>(&before, &state).unwrap_or(submitted);
                print_json(out, &selectors::find_by_id::<F>(&state, id))?;
            }
            Ok(outcome)
        }
        Command::Update { json, .. } => {
            let record: F::Record = parse_record(&json)?;
            let id = *record.id();

            // UPDATE only replaces known records, so load the current one first
            let loaded = drive(store, effects::fetch_by_id::<F>(ctx.clone(), id)).await;
            if !loaded.is_success() {
                return Ok(loaded);
            }

            let outcome = drive(store, effects::update::<F>(ctx, record)).await;
            if outcome.is_success() {
                print_json(out, &selectors::find_by_id::<F>(&store.state(), id))?;
            }
            Ok(outcome)
        }
        Command::Remove { id, .. } => {
            let outcome = drive(store, effects::remove::<F>(ctx, id)).await;
            if outcome.is_success() {
                writeln!(out, "Removed {} {}", F::PATH, id)?;
            }
            Ok(outcome)
        }
    }
}

/// Products are listed together with their product type names, so both
/// lists are fetched concurrently before the rows are selected.
async fn list_products(
    session: &mut Session,
    ctx: EffectContext,
    out: &mut dyn Write,
) -> Result<EffectOutcome> {
    let store = &mut session.store;
    let products = store.dispatch_effect(effects::fetch_all::<Products>(ctx.clone()));
    let product_types = store.dispatch_effect(effects::fetch_all::<ProductTypes>(ctx));
    let (outcome, types_outcome) = store
        .run_until(async { tokio::join!(products, product_types) })
        .await;

    if !types_outcome.is_success() {
        log::warn!("Listing products without product type names");
    }
    if outcome.is_success() {
        print_json(out, &*session.product_rows())?;
    }
    Ok(outcome)
}

async fn drive<E>(store: &mut AppStore, effect: E) -> EffectOutcome
where
    E: FnOnce(Dispatcher<Action>, StateReader<AppState>) -> PendingEffect,
{
    let pending = store.dispatch_effect(effect);
    store.run_until(pending).await
}

fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to format output")?;
    writeln!(out, "{}", text)?;
    Ok(())
}
