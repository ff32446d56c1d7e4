//! Edit command implementations
//!
//! Every edit follows the same cycle as the original dashboard: load the
//! full table snapshot, mutate it in memory, then save it back with a
//! destructive full-table replace.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use spendcast_core::db::Database;
use spendcast_core::models::{
    BudgetLine, IncomeSource, NewBudgetLine, NewIncomeSource, NewTransaction, SpendKind,
    Transaction,
};

use super::truncate;

pub fn cmd_tx_list(db: &Database) -> Result<()> {
    let transactions = db.load_transactions()?;

    if transactions.is_empty() {
        println!("No transactions found. Add one with:");
        println!("  spendcast tx add --date 2025-05-01 --category Renta --amount 120");
        return Ok(());
    }

    println!();
    println!("📝 Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in &transactions {
        let date = tx
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "          ".to_string());
        println!(
            "   [{:>3}] {} │ {:>10.2} │ {:5} │ {}",
            tx.id,
            date,
            tx.amount,
            tx.kind,
            truncate(&tx.category, 25)
        );
    }

    Ok(())
}

pub fn cmd_tx_add(
    db: &Database,
    date: &str,
    category: &str,
    amount: f64,
    kind: &str,
) -> Result<()> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .context("Invalid date format (use YYYY-MM-DD)")?;
    let kind: SpendKind = kind.parse().map_err(anyhow::Error::msg)?;

    let mut snapshot: Vec<NewTransaction> = db
        .load_transactions()?
        .iter()
        .map(Transaction::as_new)
        .collect();
    snapshot.push(NewTransaction {
        date: Some(date),
        category: category.to_string(),
        amount,
        kind,
    });
    db.replace_transactions(&snapshot)?;

    println!("✅ Recorded {:.2} on {} ({})", amount, category, date);
    Ok(())
}

pub fn cmd_tx_delete(db: &Database, id: i64) -> Result<()> {
    let transactions = db.load_transactions()?;
    if !transactions.iter().any(|tx| tx.id == id) {
        anyhow::bail!("Transaction {} not found", id);
    }

    let snapshot: Vec<NewTransaction> = transactions
        .iter()
        .filter(|tx| tx.id != id)
        .map(|tx| tx.as_new())
        .collect();
    db.replace_transactions(&snapshot)?;

    println!("✅ Deleted transaction {}", id);
    Ok(())
}

pub fn cmd_budget_set(db: &Database, category: &str, amount: f64) -> Result<()> {
    let mut snapshot: Vec<NewBudgetLine> = db
        .load_budget()?
        .iter()
        .map(BudgetLine::as_new)
        .collect();

    match snapshot.iter_mut().find(|line| line.category == category) {
        Some(line) => line.assigned = amount,
        None => snapshot.push(NewBudgetLine {
            category: category.to_string(),
            assigned: amount,
        }),
    }
    db.replace_budget(&snapshot)?;

    println!("✅ Budget for {} set to {:.2}", category, amount);
    Ok(())
}

pub fn cmd_income_set(db: &Database, source: &str, amount: f64) -> Result<()> {
    let mut snapshot: Vec<NewIncomeSource> = db
        .load_income()?
        .iter()
        .map(IncomeSource::as_new)
        .collect();

    match snapshot.iter_mut().find(|src| src.source == source) {
        Some(src) => src.amount = amount,
        None => snapshot.push(NewIncomeSource {
            source: source.to_string(),
            amount,
        }),
    }
    db.replace_income(&snapshot)?;

    println!("✅ Income {} set to {:.2}", source, amount);
    Ok(())
}
