//! # Seed Data Generator
//!
//! Populates the database with catalog data for development.
//!
//! ## Usage
//! ```bash
//! # Generate 500 products (default)
//! cargo run -p storefront-db --bin seed
//!
//! # Generate custom amount into a specific file
//! cargo run -p storefront-db --bin seed -- --count 5000 --db ./data/storefront.db
//! ```
//!
//! ## Generated Data
//! - One category per group below
//! - Products cycling through the group names and sizes, mostly `retail`,
//!   every fourth `wholesale`, every tenth inactive

use anyhow::Context;
use chrono::{Duration, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront_core::{Category, Product, RETAIL_PRODUCT_TYPE};
use storefront_db::migrations::migration_status;
use storefront_db::repository::category::generate_category_id;
use storefront_db::repository::product::generate_product_id;
use storefront_db::{Database, DbConfig};

/// Product groups for realistic test data
const GROUPS: &[(&str, &[&str])] = &[
    (
        "Kitchen",
        &["Kettle", "Teapot", "Mug", "Chef Knife", "Cutting Board", "Apron", "Colander"],
    ),
    (
        "Garden",
        &["Trowel", "Watering Can", "Hose Reel", "Pruning Shears", "Seed Tray", "Gloves"],
    ),
    (
        "Office",
        &["Notebook", "Desk Lamp", "Stapler", "Fountain Pen", "Monitor Stand", "Planner"],
    ),
    (
        "Bath",
        &["Towel", "Bath Mat", "Soap Dish", "Shower Caddy", "Toothbrush Holder"],
    ),
];

/// Size variants appended to product names
const SIZES: &[&str] = &["Small", "Medium", "Large", "Family Pack", "Travel"];

const WHOLESALE_PRODUCT_TYPE: &str = "wholesale";

/// Storefront seed data generator
#[derive(Debug, Parser)]
#[command(name = "seed")]
struct Args {
    /// Number of products to generate
    #[arg(short, long, default_value_t = 500)]
    count: usize,

    /// Database file path
    #[arg(short, long, env = "CATALOG_DATABASE_PATH", default_value = "./storefront_dev.db")]
    db: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    println!("Storefront Seed Data Generator");
    println!("==============================");
    println!("Database: {}", args.db);
    println!("Products: {}", args.count);
    println!();

    let db = Database::new(DbConfig::new(&args.db))
        .await
        .with_context(|| format!("opening {}", args.db))?;

    println!("✓ Connected to database");
    let (total, applied) = migration_status(db.pool()).await?;
    println!("✓ Migrations applied ({}/{})", applied, total);

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();

    for (index, (group, _)) in GROUPS.iter().enumerate() {
        db.categories().insert(&generate_category(group, index)).await?;
    }
    println!("✓ Generated {} categories", GROUPS.len());

    println!();
    println!("Generating products...");

    let variants = GROUPS
        .iter()
        .flat_map(|(_, names)| names.iter())
        .flat_map(|name| SIZES.iter().map(move |size| (*name, *size)));

    let mut generated = 0;
    for (seed, (name, size)) in variants.cycle().take(args.count).enumerate() {
        let product = generate_product(name, size, seed);

        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }

        generated += 1;

        if generated % 100 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

fn generate_category(name: &str, index: usize) -> Category {
    Category {
        id: generate_category_id(),
        name: name.to_string(),
        created_date: Utc::now() - Duration::days(index as i64),
        // Leave one category unset to exercise the tri-state flag.
        is_active: if index == GROUPS.len() - 1 { None } else { Some(true) },
    }
}

/// Generates a single product with deterministic variety.
fn generate_product(name: &str, size: &str, seed: usize) -> Product {
    let product_type = if seed % 4 == 3 {
        WHOLESALE_PRODUCT_TYPE
    } else {
        RETAIL_PRODUCT_TYPE
    };

    // Repeats past the variant count get a batch suffix so names stay readable.
    let batch = seed / (SIZES.len() * GROUPS.iter().map(|(_, n)| n.len()).sum::<usize>());
    let full_name = if batch == 0 {
        format!("{} {}", name, size)
    } else {
        format!("{} {} #{}", name, size, batch + 1)
    };

    Product {
        id: generate_product_id(),
        product_type: product_type.to_string(),
        description: format!("{} in {} size", name, size.to_lowercase()),
        name: full_name,
        created_date: Utc::now() - Duration::minutes(seed as i64),
        is_active: seed % 10 != 9,
    }
}
