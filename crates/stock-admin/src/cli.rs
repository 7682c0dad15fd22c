//! Command line interface

use crate::domain_models::RecordId;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stock-admin")]
#[command(version)]
#[command(about = "Administer products, product types, stores and providers")]
#[command(long_about = "\
stock-admin - Administer the stock management API

USAGE EXAMPLES:
    # List all products with their product type
    stock-admin list product

    # Show a single store
    stock-admin show store 4

    # Search providers by name
    stock-admin search provider --filter name=acme

    # Create a product type
    stock-admin create product-type --json '{\"id\": 0, \"name\": \"Tools\"}'

CONFIGURATION:
    Configuration file: .stock-admin.toml, then ~/.config/stock-admin/config.toml

    Override with environment variables:
        STOCK_API_URL    - Base URL of the stock API
        RUST_LOG         - Log filter (e.g. debug)

EXIT CODES:
    0 - Success
    1 - Request failed or invalid input
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the stock API, overriding config and environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every record of a feature
    List { feature: FeatureArg },

    /// Show one record
    Show { feature: FeatureArg, id: RecordId },

    /// Search records; empty filter values are ignored
    Search {
        feature: FeatureArg,

        /// Filter as key=value, repeatable
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },

    /// Create a record from JSON
    Create {
        feature: FeatureArg,

        /// Record as a JSON object
        #[arg(long)]
        json: String,
    },

    /// Update a record from JSON; the record's `id` selects the target
    Update {
        feature: FeatureArg,

        /// Record as a JSON object
        #[arg(long)]
        json: String,
    },

    /// Delete a record
    Remove { feature: FeatureArg, id: RecordId },
}

impl Command {
    pub fn feature(&self) -> FeatureArg {
        match self {
            Command::List { feature }
            | Command::Show { feature, .. }
            | Command::Search { feature, .. }
            | Command::Create { feature, .. }
            | Command::Update { feature, .. }
            | Command::Remove { feature, .. } => *feature,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureArg {
    Product,
    ProductType,
    Store,
    Provider,
}

/// Parse a `key=value` filter argument
pub fn parse_filter(raw: &str) -> Result<(String, String)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Filter '{}' must have the form key=value", raw);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Filter '{}' has an empty key", raw);
    }
    Ok((key.to_string(), value.to_string()))
}

/// Build the search body from parsed filters
///
/// Values that parse as JSON scalars (numbers, booleans, null) keep that
/// type; everything else is sent as a string.
pub fn filters_to_map(filters: &[(String, String)]) -> Map<String, Value> {
    filters
        .iter()
        .map(|(key, raw)| {
            let value = match serde_json::from_str::<Value>(raw) {
                Ok(value @ (Value::Number(_) | Value::Bool(_) | Value::Null)) => value,
                _ => Value::String(raw.clone()),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Parse a `--json` argument into a record
pub fn parse_record<R: serde::de::DeserializeOwned>(json: &str) -> Result<R> {
    serde_json::from_str(json).context("Invalid --json record")
}
