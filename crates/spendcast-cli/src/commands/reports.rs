//! Report command implementations

use anyhow::Result;
use spendcast_core::aggregate::{
    category_actual_vs_budget, category_kind_pivot, dashboard_totals, weekly_totals,
    DEFAULT_WEEK_BOUNDARY,
};
use spendcast_core::db::Database;
use spendcast_core::forecast::{history_with_forecast, project_weekly};
use spendcast_core::models::SeriesKind;

use super::truncate;

/// Presentation bound on the forecast horizon; the core itself accepts any
/// positive horizon
const MAX_FORECAST_WEEKS: u32 = 12;

pub fn cmd_dashboard(db: &Database, json: bool) -> Result<()> {
    let transactions = db.load_transactions()?;
    let budget = db.load_budget()?;
    let income = db.load_income()?;

    let totals = dashboard_totals(&transactions, &budget, &income);

    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│         💰 Spendcast Dashboard          │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Total Income:    {:>12.2}", totals.total_income);
    println!("  Total Spent:     {:>12.2}", totals.total_spent);
    println!("  Balance:         {:>12.2}", totals.balance);
    println!("  Monthly Budget:  {:>12.2}", totals.total_budget);

    let weekly = weekly_totals(&transactions, DEFAULT_WEEK_BOUNDARY);
    if weekly.is_empty() {
        println!();
        println!("  No dated expenses recorded yet.");
        return Ok(());
    }

    println!();
    println!("  📈 Weekly Spending");
    println!("     Week ending │     Amount");
    println!("     ────────────┼───────────");
    for week in &weekly {
        println!("     {} │ {:>10.2}", week.week_end, week.amount);
    }

    Ok(())
}

pub fn cmd_weekly(db: &Database) -> Result<()> {
    let transactions = db.load_transactions()?;
    let weekly = weekly_totals(&transactions, DEFAULT_WEEK_BOUNDARY);

    if weekly.is_empty() {
        println!("No dated expenses recorded.");
        return Ok(());
    }

    println!();
    println!("📈 Weekly Spending Totals");
    println!("   Week ending │     Amount");
    println!("   ────────────┼───────────");
    for week in &weekly {
        println!("   {} │ {:>10.2}", week.week_end, week.amount);
    }

    Ok(())
}

pub fn cmd_budget_report(db: &Database) -> Result<()> {
    let transactions = db.load_transactions()?;
    let budget = db.load_budget()?;

    if budget.is_empty() {
        println!("No budget lines defined. Set one with:");
        println!("  spendcast budget-set <category> <amount>");
        return Ok(());
    }

    let comparison = category_actual_vs_budget(&transactions, &budget);

    println!();
    println!("📊 Budget vs. Actual");
    println!(
        "   {:25} │ {:>10} │ {:>10} │ {:>10}",
        "Category", "Assigned", "Actual", "Difference"
    );
    println!("   ──────────────────────────┼────────────┼────────────┼────────────");

    for row in &comparison {
        // Red difference marks an over-spent category
        let difference = if row.difference < 0.0 {
            format!("\x1b[31m{:>10.2}\x1b[0m", row.difference)
        } else {
            format!("{:>10.2}", row.difference)
        };
        println!(
            "   {:25} │ {:>10.2} │ {:>10.2} │ {}",
            truncate(&row.category, 25),
            row.assigned,
            row.actual,
            difference
        );
    }

    Ok(())
}

pub fn cmd_pivot(db: &Database) -> Result<()> {
    let transactions = db.load_transactions()?;
    let pivot = category_kind_pivot(&transactions);

    if pivot.rows.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    println!();
    println!("🗂  Spending by Category and Kind");
    print!("   {:25}", "Category");
    for kind in &pivot.kinds {
        print!(" │ {:>10}", kind);
    }
    println!();
    println!(
        "   ──────────────────────────{}",
        "┼────────────".repeat(pivot.kinds.len())
    );

    for row in &pivot.rows {
        print!("   {:25}", truncate(&row.category, 25));
        for amount in &row.amounts {
            print!(" │ {:>10.2}", amount);
        }
        println!();
    }

    Ok(())
}

pub fn cmd_forecast(db: &Database, weeks: u32) -> Result<()> {
    let weeks = weeks.clamp(1, MAX_FORECAST_WEEKS);
    let transactions = db.load_transactions()?;

    let projection = project_weekly(&transactions, DEFAULT_WEEK_BOUNDARY, weeks);
    if projection.is_empty() {
        println!("No expenses recorded; nothing to project.");
        return Ok(());
    }

    println!();
    println!("🔮 Naive Weekly Forecast ({} weeks)", weeks);
    println!("   Flat projection of the historical weekly average.");
    println!();
    println!("   Week ending │     Amount │ Series");
    println!("   ────────────┼────────────┼──────────");

    for point in history_with_forecast(&transactions, DEFAULT_WEEK_BOUNDARY, weeks) {
        let label = match point.series {
            SeriesKind::Actual => "actual",
            SeriesKind::Projected => "\x1b[36mprojected\x1b[0m",
        };
        println!(
            "   {} │ {:>10.2} │ {}",
            point.week_end, point.amount, label
        );
    }

    Ok(())
}
