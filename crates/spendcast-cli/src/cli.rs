//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spendcast - Weekly spending and budget tracker
#[derive(Parser)]
#[command(name = "spendcast")]
#[command(about = "Track expenses against a monthly budget and forecast weekly spend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "spendcast.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and seed default data
    Init,

    /// Show KPI totals and the weekly spending trend
    Dashboard {
        /// Print the KPI totals as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show weekly spending totals
    Weekly,

    /// Compare actual spending with the monthly budget per category
    Budget,

    /// Cross-tab of spending by category and payment kind
    Pivot,

    /// Project future weekly spend from the historical average
    Forecast {
        /// Number of weeks to project (1-12)
        #[arg(short, long, default_value = "4")]
        weeks: u32,
    },

    /// Manage expense transactions
    Tx {
        #[command(subcommand)]
        action: TxAction,
    },

    /// Set a category's monthly budget (adds the category if missing)
    BudgetSet {
        /// Category name
        category: String,

        /// Assigned monthly amount
        amount: f64,
    },

    /// Set an income source's amount (adds the source if missing)
    IncomeSet {
        /// Income source name
        source: String,

        /// Monthly amount
        amount: f64,
    },

    /// Export a table as CSV or JSON
    Export {
        /// Table to export: transactions, budget, income
        #[arg(short, long)]
        table: String,

        /// Output format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum TxAction {
    /// List all transactions
    List,

    /// Add a transaction and save the table
    Add {
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Category name
        #[arg(short, long)]
        category: String,

        /// Amount spent
        #[arg(short, long)]
        amount: f64,

        /// Payment kind: card, other
        #[arg(short, long, default_value = "other")]
        kind: String,
    },

    /// Delete a transaction by id and save the table
    Delete {
        /// Transaction id (see `spendcast tx list`)
        id: i64,
    },
}
