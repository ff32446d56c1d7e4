//! Domain models for Spendcast

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// `None` when the stored date text did not parse as a calendar date.
    /// Such rows are excluded from weekly grouping but still count toward
    /// category totals.
    pub date: Option<NaiveDate>,
    pub category: String,
    pub amount: f64,
    pub kind: SpendKind,
}

/// Insert/seed form of a transaction (no storage id yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: Option<NaiveDate>,
    pub category: String,
    pub amount: f64,
    pub kind: SpendKind,
}

impl Transaction {
    /// View of this row as an insert form, for full-table replace
    pub fn as_new(&self) -> NewTransaction {
        NewTransaction {
            date: self.date,
            category: self.category.clone(),
            amount: self.amount,
            kind: self.kind,
        }
    }
}

/// Payment kind for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendKind {
    /// Paid by card
    Card,
    /// Everything else (cash, transfer, ...)
    Other,
}

impl SpendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for SpendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown spend kind: {}", s)),
        }
    }
}

impl std::fmt::Display for SpendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A category's assigned monthly spending ceiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub id: i64,
    pub category: String,
    pub assigned: f64,
}

/// Insert/seed form of a budget line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudgetLine {
    pub category: String,
    pub assigned: f64,
}

impl BudgetLine {
    pub fn as_new(&self) -> NewBudgetLine {
        NewBudgetLine {
            category: self.category.clone(),
            assigned: self.assigned,
        }
    }
}

/// An income source (typically fixed salary plus a flexible remainder)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: i64,
    pub source: String,
    pub amount: f64,
}

/// Insert/seed form of an income source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIncomeSource {
    pub source: String,
    pub amount: f64,
}

impl IncomeSource {
    pub fn as_new(&self) -> NewIncomeSource {
        NewIncomeSource {
            source: self.source.clone(),
            amount: self.amount,
        }
    }
}

/// Sum of transaction amounts within one calendar week bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTotal {
    /// Last day of the week bucket (the configured boundary weekday)
    pub week_end: NaiveDate,
    pub amount: f64,
}

/// One row of the budget vs. actual comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetComparison {
    pub category: String,
    pub assigned: f64,
    pub actual: f64,
    /// `assigned - actual`; positive means under budget
    pub difference: f64,
}

/// Cross-tab of summed amounts by (category, kind)
///
/// Columns are the kind strings observed in the data, so only kinds that
/// actually occur produce a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindPivot {
    /// Column labels, sorted
    pub kinds: Vec<String>,
    /// One row per observed category, sorted by category name
    pub rows: Vec<PivotRow>,
}

/// One pivot row; `amounts` is parallel to the pivot's `kinds`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    pub category: String,
    pub amounts: Vec<f64>,
}

impl KindPivot {
    /// Sum over every cell of the table
    pub fn cell_sum(&self) -> f64 {
        self.rows.iter().flat_map(|r| r.amounts.iter()).sum()
    }
}

/// One projected future week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub week_end: NaiveDate,
    pub projected: f64,
}

/// Whether a combined-series point is history or projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Actual,
    Projected,
}

impl SeriesKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actual => "actual",
            Self::Projected => "projected",
        }
    }
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One point of the combined historical + projected weekly series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub week_end: NaiveDate,
    pub amount: f64,
    pub series: SeriesKind,
}

/// KPI roll-up shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTotals {
    pub total_income: f64,
    pub total_spent: f64,
    /// `total_income - total_spent`
    pub balance: f64,
    pub total_budget: f64,
}
