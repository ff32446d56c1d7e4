//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_db) and `init`
//! - `reports` - Dashboard, weekly, budget, pivot, and forecast rendering
//! - `edit` - Transaction/budget/income edit commands (load, mutate, save)
//! - `export` - Table export to CSV/JSON

pub mod core;
pub mod edit;
pub mod export;
pub mod reports;

// Re-export command functions for main.rs
pub use core::*;
pub use edit::*;
pub use export::*;
pub use reports::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
