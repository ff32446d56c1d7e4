//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database and seed default data

use std::path::Path;

use anyhow::{Context, Result};
use spendcast_core::{db::Database, seed};
use tracing::debug;

/// Open (creating if needed) the database at the given path
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    debug!(path = path_str, "Opening database");
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;

    // Each table seeds independently, so a partially edited database only
    // fills in what is still empty
    if db
        .seed_transactions_if_empty(seed::default_transactions)
        .context("Failed to seed transactions")?
    {
        println!("   Seeded sample transactions");
    }
    if db
        .seed_budget_if_empty(seed::default_budget)
        .context("Failed to seed budget")?
    {
        println!("   Seeded default budget");
    }
    if db
        .seed_income_if_empty(seed::default_income)
        .context("Failed to seed income")?
    {
        println!("   Seeded income sources");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. See the dashboard: spendcast dashboard");
    println!("  2. Record an expense: spendcast tx add --date 2025-05-01 --category Renta --amount 120");

    Ok(())
}
