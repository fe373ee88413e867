//! # Storefront Catalog
//!
//! Prints one page of the product listing.
//!
//! ## Usage
//! ```bash
//! catalog                      # first page, 20 retail products by name
//! catalog --page 2             # third page
//! catalog --sort created_date --desc --json
//! catalog --search kettle
//! ```
//!
//! Logs go to stderr (`RUST_LOG=debug` for per-query detail); the page
//! goes to stdout.

mod config;
mod error;
mod page;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use storefront_core::SortDirection;
use storefront_db::{Database, DbConfig, ProductSortKey};

use crate::config::{CatalogConfig, DEFAULT_CONFIG_FILE};
use crate::error::AppResult;
use crate::page::{IndexPage, ListingOptions};
use crate::render::{render_json, render_page};

/// Paginated product listing
#[derive(Debug, Parser)]
#[command(name = "catalog", version)]
struct Cli {
    /// Zero-based page to show
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    page: i64,

    /// Products per page (overrides configuration)
    #[arg(long, allow_negative_numbers = true)]
    page_size: Option<i64>,

    /// Product type to list (overrides configuration)
    #[arg(long = "type")]
    product_type: Option<String>,

    /// Sort column: name, type or created_date
    #[arg(long, default_value = "name")]
    sort: ProductSortKey,

    /// Sort descending
    #[arg(long)]
    desc: bool,

    /// Only products whose name contains this text
    #[arg(long)]
    search: Option<String>,

    /// Print the page as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Database file (overrides configuration)
    #[arg(long)]
    db: Option<String>,

    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Catalog listing failed");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = CatalogConfig::load(&cli.config)?;

    if let Some(db) = cli.db {
        config.database_path = db;
    }
    if let Some(product_type) = cli.product_type {
        config.product_type = product_type;
    }

    info!(
        database = %config.database_path,
        product_type = %config.product_type,
        "Configuration loaded"
    );

    let mut options = ListingOptions::from_config(&config);
    // A bad --page-size is reported by the query, not silently replaced.
    if let Some(page_size) = cli.page_size {
        options.page_size = page_size;
    }
    options.sort = cli.sort;
    options.direction = SortDirection::from_descending(cli.desc);
    options.search = cli.search;

    let db = Database::new(
        DbConfig::new(&config.database_path).max_connections(config.max_connections),
    )
    .await?;

    let result = IndexPage::load(&db, &options, cli.page).await;
    db.close().await;
    let index = result?;

    if cli.json {
        println!("{}", render_json(&index.products)?);
    } else {
        print!("{}", render_page(&index.products));
    }

    Ok(())
}
