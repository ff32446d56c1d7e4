//! Spendcast Core Library
//!
//! Shared functionality for the Spendcast weekly spending tracker:
//! - SQLite record store for transactions, budget lines, and income sources
//! - Weekly and per-category spending aggregation
//! - Budget vs. actual comparison
//! - Naive flat forecast from historical weekly averages
//! - CSV/JSON table export
//! - Synthetic seed data for first run

pub mod aggregate;
pub mod db;
pub mod error;
pub mod export;
pub mod forecast;
pub mod models;
pub mod seed;

pub use db::Database;
pub use error::{Error, Result};
pub use export::ExportFormat;
pub use models::{
    BudgetComparison, BudgetLine, DashboardTotals, ForecastPoint, IncomeSource, KindPivot,
    NewBudgetLine, NewIncomeSource, NewTransaction, PivotRow, SeriesKind, SpendKind, Transaction,
    WeeklyPoint, WeeklyTotal,
};
