//! Export command implementation

use std::path::Path;

use anyhow::{Context, Result};
use spendcast_core::db::Database;
use spendcast_core::export::{export_budget, export_income, export_transactions, ExportFormat};

pub fn cmd_export(db: &Database, table: &str, format: &str, out: Option<&Path>) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(anyhow::Error::msg)?;

    let serialized = match table.to_lowercase().as_str() {
        "transactions" | "tx" => export_transactions(&db.load_transactions()?, format)?,
        "budget" => export_budget(&db.load_budget()?, format)?,
        "income" => export_income(&db.load_income()?, format)?,
        _ => anyhow::bail!(
            "Unknown table: {}. Available: transactions, budget, income",
            table
        ),
    };

    match out {
        Some(path) => {
            std::fs::write(path, &serialized)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✅ Exported {} to {}", table, path.display());
        }
        None => print!("{}", serialized),
    }

    Ok(())
}
