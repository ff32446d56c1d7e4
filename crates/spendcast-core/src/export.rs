//! Table export for download
//!
//! Each table serializes to CSV (comma-separated, header row, no index
//! column) or pretty JSON. Pure formatting over loaded snapshots; the
//! storage id column is never exported.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{BudgetLine, IncomeSource, Transaction};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction row as exported (a missing date becomes an empty field)
#[derive(Serialize)]
struct TransactionRow<'a> {
    date: Option<NaiveDate>,
    category: &'a str,
    amount: f64,
    kind: &'a str,
}

#[derive(Serialize)]
struct BudgetRow<'a> {
    category: &'a str,
    assigned: f64,
}

#[derive(Serialize)]
struct IncomeRow<'a> {
    source: &'a str,
    amount: f64,
}

fn write_csv<T: Serialize>(headers: &[&str], rows: impl Iterator<Item = T>) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        let mut wrote_row = false;
        for row in rows {
            writer.serialize(row)?;
            wrote_row = true;
        }
        if !wrote_row {
            // serialize() emits the header with the first row, so an empty
            // table needs it written explicitly
            writer.write_record(headers)?;
        }
        writer.flush()?;
    }
    String::from_utf8(buf).map_err(|e| Error::InvalidData(e.to_string()))
}

/// Serialize the transaction table
pub fn export_transactions(rows: &[Transaction], format: ExportFormat) -> Result<String> {
    let rows = rows.iter().map(|tx| TransactionRow {
        date: tx.date,
        category: &tx.category,
        amount: tx.amount,
        kind: tx.kind.as_str(),
    });
    match format {
        ExportFormat::Csv => write_csv(&["date", "category", "amount", "kind"], rows),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&rows.collect::<Vec<_>>())?),
    }
}

/// Serialize the budget table
pub fn export_budget(rows: &[BudgetLine], format: ExportFormat) -> Result<String> {
    let rows = rows.iter().map(|line| BudgetRow {
        category: &line.category,
        assigned: line.assigned,
    });
    match format {
        ExportFormat::Csv => write_csv(&["category", "assigned"], rows),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&rows.collect::<Vec<_>>())?),
    }
}

/// Serialize the income table
pub fn export_income(rows: &[IncomeSource], format: ExportFormat) -> Result<String> {
    let rows = rows.iter().map(|src| IncomeRow {
        source: &src.source,
        amount: src.amount,
    });
    match format {
        ExportFormat::Csv => write_csv(&["source", "amount"], rows),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&rows.collect::<Vec<_>>())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpendKind;

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction {
                id: 1,
                date: NaiveDate::from_ymd_opt(2025, 3, 3),
                category: "Renta".to_string(),
                amount: 2000.0,
                kind: SpendKind::Other,
            },
            Transaction {
                id: 2,
                date: None,
                category: "Aseo".to_string(),
                amount: 50.0,
                kind: SpendKind::Card,
            },
        ]
    }

    #[test]
    fn test_transactions_csv_has_header_and_no_id() {
        let csv = export_transactions(&sample_transactions(), ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("date,category,amount,kind"));
        assert_eq!(lines.next(), Some("2025-03-03,Renta,2000.0,other"));
        // Missing date exports as an empty leading field
        assert_eq!(lines.next(), Some(",Aseo,50.0,card"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_transactions_json() {
        let json = export_transactions(&sample_transactions(), ExportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["date"], "2025-03-03");
        assert_eq!(parsed[1]["date"], serde_json::Value::Null);
        assert_eq!(parsed[0]["kind"], "other");
    }

    #[test]
    fn test_budget_and_income_csv() {
        let budget = vec![BudgetLine {
            id: 9,
            category: "Renta".to_string(),
            assigned: 2000.0,
        }];
        let csv = export_budget(&budget, ExportFormat::Csv).unwrap();
        assert_eq!(csv, "category,assigned\nRenta,2000.0\n");

        let income = vec![IncomeSource {
            id: 3,
            source: "Salario".to_string(),
            amount: 14000.0,
        }];
        let csv = export_income(&income, ExportFormat::Csv).unwrap();
        assert_eq!(csv, "source,amount\nSalario,14000.0\n");
    }

    #[test]
    fn test_empty_tables_export_header_only() {
        let csv = export_transactions(&[], ExportFormat::Csv).unwrap();
        assert_eq!(csv, "date,category,amount,kind\n");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
