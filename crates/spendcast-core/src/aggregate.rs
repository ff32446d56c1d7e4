//! Spending aggregation: weekly series, budget comparison, kind pivot
//!
//! All functions here are pure and total over in-memory table snapshots;
//! the CLI recomputes them on every interaction.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::{
    BudgetComparison, BudgetLine, DashboardTotals, IncomeSource, KindPivot, PivotRow, Transaction,
    WeeklyTotal,
};

/// Week bucketing boundary used by the dashboard: calendar weeks ending on
/// Sunday
pub const DEFAULT_WEEK_BOUNDARY: Weekday = Weekday::Sun;

/// The bucket label for a date: the next day on or after it whose weekday is
/// the boundary
pub fn week_ending(date: NaiveDate, boundary: Weekday) -> NaiveDate {
    let days_ahead = (boundary.num_days_from_monday() + 7
        - date.weekday().num_days_from_monday())
        % 7;
    date + Duration::days(i64::from(days_ahead))
}

/// Group transactions by calendar week ending on `boundary` and sum amounts.
///
/// Output is ascending by week-end date. Weeks with no transactions are
/// absent (no zero-filling of gaps), and rows without a parseable date are
/// skipped. Empty input yields an empty series.
pub fn weekly_totals(transactions: &[Transaction], boundary: Weekday) -> Vec<WeeklyTotal> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for tx in transactions {
        if let Some(date) = tx.date {
            *buckets.entry(week_ending(date, boundary)).or_insert(0.0) += tx.amount;
        }
    }
    buckets
        .into_iter()
        .map(|(week_end, amount)| WeeklyTotal { week_end, amount })
        .collect()
}

/// Sum of transaction amounts per category
pub fn category_totals(transactions: &[Transaction]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for tx in transactions {
        *totals.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
    }
    totals
}

/// Left-join actual spending onto the budget table by category name.
///
/// Budget categories with no spending show an actual of 0; categories that
/// only appear in transactions are dropped. The join matches category names
/// verbatim, so a spelling difference (trailing whitespace, accents) silently
/// shows up as zero actual spend rather than being flagged. Output order and
/// row count follow the budget table.
pub fn category_actual_vs_budget(
    transactions: &[Transaction],
    budget: &[BudgetLine],
) -> Vec<BudgetComparison> {
    let actuals = category_totals(transactions);
    budget
        .iter()
        .map(|line| {
            let actual = actuals.get(&line.category).copied().unwrap_or(0.0);
            BudgetComparison {
                category: line.category.clone(),
                assigned: line.assigned,
                actual,
                difference: line.assigned - actual,
            }
        })
        .collect()
}

/// Cross-tabulate summed amounts by (category, kind).
///
/// One row per observed category and one column per observed kind string;
/// combinations that never occur are filled with 0. Rows and columns are
/// sorted for deterministic output.
pub fn category_kind_pivot(transactions: &[Transaction]) -> KindPivot {
    let kinds: BTreeSet<&str> = transactions.iter().map(|tx| tx.kind.as_str()).collect();
    let kinds: Vec<String> = kinds.into_iter().map(str::to_string).collect();

    let mut cells: BTreeMap<&str, HashMap<&str, f64>> = BTreeMap::new();
    for tx in transactions {
        *cells
            .entry(tx.category.as_str())
            .or_default()
            .entry(tx.kind.as_str())
            .or_insert(0.0) += tx.amount;
    }

    let rows = cells
        .into_iter()
        .map(|(category, by_kind)| PivotRow {
            category: category.to_string(),
            amounts: kinds
                .iter()
                .map(|k| by_kind.get(k.as_str()).copied().unwrap_or(0.0))
                .collect(),
        })
        .collect();

    KindPivot { kinds, rows }
}

/// KPI roll-up for the dashboard header
pub fn dashboard_totals(
    transactions: &[Transaction],
    budget: &[BudgetLine],
    income: &[IncomeSource],
) -> DashboardTotals {
    let total_spent: f64 = transactions.iter().map(|tx| tx.amount).sum();
    let total_budget: f64 = budget.iter().map(|line| line.assigned).sum();
    let total_income: f64 = income.iter().map(|src| src.amount).sum();

    DashboardTotals {
        total_income,
        total_spent,
        balance: total_income - total_spent,
        total_budget,
    }
}
