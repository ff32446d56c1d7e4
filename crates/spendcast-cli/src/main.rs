//! Spendcast CLI - Weekly spending and budget tracker
//!
//! Usage:
//!   spendcast init                Initialize database with default data
//!   spendcast dashboard           KPI totals and weekly trend
//!   spendcast budget              Budget vs. actual per category
//!   spendcast forecast --weeks 4  Naive weekly projection

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Dashboard { json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_dashboard(&db, json)
        }
        Commands::Weekly => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_weekly(&db)
        }
        Commands::Budget => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_budget_report(&db)
        }
        Commands::Pivot => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_pivot(&db)
        }
        Commands::Forecast { weeks } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_forecast(&db, weeks)
        }
        Commands::Tx { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                TxAction::List => commands::cmd_tx_list(&db),
                TxAction::Add {
                    date,
                    category,
                    amount,
                    kind,
                } => commands::cmd_tx_add(&db, &date, &category, amount, &kind),
                TxAction::Delete { id } => commands::cmd_tx_delete(&db, id),
            }
        }
        Commands::BudgetSet { category, amount } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_budget_set(&db, &category, amount)
        }
        Commands::IncomeSet { source, amount } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_income_set(&db, &source, amount)
        }
        Commands::Export { table, format, out } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_export(&db, &table, &format, out.as_deref())
        }
    }
}
