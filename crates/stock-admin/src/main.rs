use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

mod actions;
mod cli;
mod commands;
mod domain_models;
mod effects;
mod features;
mod logger;
mod notifier;
mod reducers;
mod selectors;
mod spinner;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use anyhow::Context;
use cli::Cli;
use commands::Session;
use effects::EffectContext;
use notifier::LogNotifier;
use spinner::LoadingIndicator;
use state::AppState;
use stock_client::HttpClient;
use stock_config::{AppConfig, ConfigOrigin, API_URL_ENV};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // .env may provide STOCK_API_URL and RUST_LOG
    let dotenv = dotenvy::dotenv();

    let (config, origin) = match &cli.config {
        Some(path) => (
            AppConfig::load_from(path)?.with_api_url_override(std::env::var(API_URL_ENV).ok()),
            ConfigOrigin::File(path.clone()),
        ),
        None => AppConfig::load(),
    };
    let config = config.with_api_url_override(cli.api_url.clone());

    // The log level comes from config, so config is reported afterwards
    logger::init(&config.log_level);
    origin.log();
    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) => log::debug!("No .env file loaded: {}", e),
    }
    log::info!("Using stock API at {}", config.api_base_url);

    let client = HttpClient::new(config.api_base_url.clone(), config.request_timeout())
        .context("Failed to create HTTP client")?;
    let ctx = EffectContext::new(Arc::new(client), Arc::new(LogNotifier));

    let store = store::configure_store(AppState::default());
    let indicator = Arc::new(LoadingIndicator::default());
    let _loading = store.subscribe(indicator.callback(store.reader()));
    let mut session = Session::new(store);

    let outcome = commands::run(cli.command, &mut session, ctx, &mut std::io::stdout()).await?;

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
