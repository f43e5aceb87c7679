//! # Seed Data Generator
//!
//! Populates an empty slice store with the storefront's default content:
//! the starter catalog, the default layout and the light theme.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p boladas-store --bin seed
//!
//! # Specify database path
//! cargo run -p boladas-store --bin seed -- --db ./data/boladas.db
//! ```
//!
//! Seeding is skipped when a catalog slice already exists; delete the
//! database file to regenerate.

use std::env;

use boladas_core::{defaults, Catalog, LayoutSettings, Theme};
use boladas_store::{Slice, Store, StoreConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./boladas_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Só Boladas Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./boladas_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Só Boladas Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!();

    let store = Store::new(StoreConfig::new(&db_path)).await?;
    let kv = store.kv();

    println!("✓ Connected to store");
    println!("✓ Migrations applied");

    // Skip when already seeded
    let existing: Option<Catalog> = kv.read_slice(Slice::Catalog).await?;
    if let Some(catalog) = existing {
        println!("⚠ Store already has {} products", catalog.len());
        println!("  Skipping seed to avoid clobbering live data.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let catalog = defaults::default_catalog();
    let layout = LayoutSettings::default();

    kv.write_slice(Slice::Catalog, &catalog).await?;
    kv.write_slice(Slice::Layout, &layout).await?;
    kv.write_slice(Slice::Theme, &Theme::Light).await?;

    println!();
    println!("✓ Seeded {} products", catalog.len());
    println!("✓ Seeded layout for '{}'", layout.brand_name);
    println!("✓ Seed complete!");

    Ok(())
}
