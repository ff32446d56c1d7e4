//! Integration tests for spendcast-core
//!
//! These tests exercise the full seed → aggregate → forecast → edit → save
//! cycle through the public API.

use chrono::{NaiveDate, Weekday};

use spendcast_core::{
    aggregate::{category_actual_vs_budget, category_kind_pivot, dashboard_totals, weekly_totals},
    db::Database,
    export::{export_transactions, ExportFormat},
    forecast::project_weekly,
    models::{NewTransaction, SpendKind, Transaction},
    seed,
};

#[test]
fn test_first_run_seeds_and_reports() {
    let db = Database::in_memory().expect("Failed to create test database");

    assert!(db.seed_transactions_if_empty(seed::default_transactions).unwrap());
    assert!(db.seed_budget_if_empty(seed::default_budget).unwrap());
    assert!(db.seed_income_if_empty(seed::default_income).unwrap());

    let transactions = db.load_transactions().unwrap();
    let budget = db.load_budget().unwrap();
    let income = db.load_income().unwrap();

    // Weekly totals cover every seeded row (all seed dates parse)
    let weekly = weekly_totals(&transactions, Weekday::Sun);
    let weekly_sum: f64 = weekly.iter().map(|w| w.amount).sum();
    let tx_sum: f64 = transactions.iter().map(|tx| tx.amount).sum();
    assert!((weekly_sum - tx_sum).abs() < 1e-9);
    assert!(weekly.windows(2).all(|w| w[0].week_end < w[1].week_end));

    // Left-join semantics: one comparison row per budget line
    let comparison = category_actual_vs_budget(&transactions, &budget);
    assert_eq!(comparison.len(), budget.len());

    // Pivot cells account for the full spend
    let pivot = category_kind_pivot(&transactions);
    assert!((pivot.cell_sum() - tx_sum).abs() < 1e-9);

    // KPIs line up with the seeded income
    let totals = dashboard_totals(&transactions, &budget, &income);
    assert_eq!(totals.total_income, 15000.0);
    assert!((totals.balance - (15000.0 - tx_sum)).abs() < 1e-9);
}

#[test]
fn test_edit_save_recompute_cycle() {
    let db = Database::in_memory().expect("Failed to create test database");
    db.seed_budget_if_empty(seed::default_budget).unwrap();

    // User enters two expenses and saves
    let snapshot = vec![
        NewTransaction {
            date: NaiveDate::from_ymd_opt(2025, 3, 3),
            category: "Renta".to_string(),
            amount: 2000.0,
            kind: SpendKind::Other,
        },
        NewTransaction {
            date: NaiveDate::from_ymd_opt(2025, 3, 10),
            category: "Renta".to_string(),
            amount: 100.0,
            kind: SpendKind::Card,
        },
    ];
    db.replace_transactions(&snapshot).unwrap();

    let transactions = db.load_transactions().unwrap();
    let weekly = weekly_totals(&transactions, Weekday::Sun);
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly[0].amount, 2000.0);
    assert_eq!(weekly[1].amount, 100.0);

    // Flat projection from the 1050 mean
    let projection = project_weekly(&transactions, Weekday::Sun, 2);
    assert_eq!(projection.len(), 2);
    assert!(projection.iter().all(|p| p.projected == 1050.0));
    assert_eq!(
        projection[0].week_end,
        NaiveDate::from_ymd_opt(2025, 3, 23).unwrap()
    );

    // User deletes the first row in the editor and saves the new snapshot
    let edited: Vec<NewTransaction> = transactions[1..]
        .iter()
        .map(Transaction::as_new)
        .collect();
    db.replace_transactions(&edited).unwrap();

    let transactions = db.load_transactions().unwrap();
    assert_eq!(transactions.len(), 1);
    let weekly = weekly_totals(&transactions, Weekday::Sun);
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].amount, 100.0);
}

#[test]
fn test_export_matches_stored_snapshot() {
    let db = Database::in_memory().expect("Failed to create test database");
    db.replace_transactions(&[NewTransaction {
        date: NaiveDate::from_ymd_opt(2025, 3, 3),
        category: "Renta".to_string(),
        amount: 2000.0,
        kind: SpendKind::Other,
    }])
    .unwrap();

    let transactions = db.load_transactions().unwrap();
    let csv = export_transactions(&transactions, ExportFormat::Csv).unwrap();
    assert_eq!(csv, "date,category,amount,kind\n2025-03-03,Renta,2000.0,other\n");
}

#[test]
fn test_reopening_preserves_saved_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendcast.db");
    let path = path.to_str().unwrap();

    {
        let db = Database::new(path).unwrap();
        db.replace_income(&seed::default_income()).unwrap();
    }

    // A second process start sees the saved snapshot and does not re-seed
    let db = Database::new(path).unwrap();
    assert!(!db.seed_income_if_empty(seed::default_income).unwrap());
    let income = db.load_income().unwrap();
    assert_eq!(income.len(), 2);
    assert_eq!(income[0].source, "Salario");
}
