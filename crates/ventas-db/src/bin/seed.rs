//! # Seed Data Generator
//!
//! Populates an empty database with demo sales for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./ventas.db (or VENTAS_DB_PATH)
//! cargo run -p ventas-db --bin seed
//!
//! # Specify database path
//! cargo run -p ventas-db --bin seed -- --db ./data/ventas.db
//! ```

use std::env;
use ventas_db::{Database, DbConfig};

/// Demo sales: (product, unit price, quantity)
const DEMO_SALES: &[(&str, f64, i64)] = &[
    ("Bread", 2.50, 4),
    ("Milk", 1.20, 10),
    ("Bread", 2.50, 1),
    ("Eggs", 0.30, 12),
    ("Coffee", 7.95, 2),
    ("Sugar", 1.10, 3),
    ("Butter", 3.40, 2),
    ("Milk", 1.20, 6),
    ("Honey", 5.25, 1),
    ("Flour", 1.05, 5),
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut config = DbConfig::from_env();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if let Some(path) = args.get(i + 1) {
                    config = DbConfig::new(path);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Ventas Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./ventas.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {other}");
            }
        }
        i += 1;
    }

    println!("Ventas Seed Data Generator");
    println!("==========================");
    println!("Database: {}", config.database_path.display());
    println!();

    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.sales().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {existing} sales");
        println!("  Skipping seed to avoid duplicates.");
        db.close().await;
        return Ok(());
    }

    for (product, unit_price, quantity) in DEMO_SALES {
        db.sales().register(product, *unit_price, *quantity).await?;
    }

    println!("✓ Inserted {} sales", DEMO_SALES.len());

    if let Some(summary) = db.reports().summarize().await? {
        println!();
        println!("  Total revenue:      {:.2}", summary.total_revenue);
        println!("  Top product:        {}", summary.top_product);
        println!("  Average unit price: {:.2}", summary.average_unit_price);
    }

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
