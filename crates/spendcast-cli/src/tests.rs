//! CLI command tests

use spendcast_core::db::Database;
use spendcast_core::seed;

use crate::commands::{self, truncate};

fn setup_seeded_db() -> Database {
    let db = Database::in_memory().unwrap();
    db.seed_transactions_if_empty(seed::default_transactions)
        .unwrap();
    db.seed_budget_if_empty(seed::default_budget).unwrap();
    db.seed_income_if_empty(seed::default_income).unwrap();
    db
}

// ========== Edit Command Tests ==========

#[test]
fn test_cmd_tx_add_persists() {
    let db = Database::in_memory().unwrap();

    commands::cmd_tx_add(&db, "2025-05-01", "Renta", 120.0, "card").unwrap();

    let transactions = db.load_transactions().unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].category, "Renta");
    assert_eq!(transactions[0].amount, 120.0);
}

#[test]
fn test_cmd_tx_add_rejects_bad_input() {
    let db = Database::in_memory().unwrap();

    assert!(commands::cmd_tx_add(&db, "05/01/2025", "Renta", 120.0, "card").is_err());
    assert!(commands::cmd_tx_add(&db, "2025-05-01", "Renta", 120.0, "crypto").is_err());
    assert!(db.load_transactions().unwrap().is_empty());
}

#[test]
fn test_cmd_tx_delete() {
    let db = Database::in_memory().unwrap();
    commands::cmd_tx_add(&db, "2025-05-01", "Renta", 120.0, "card").unwrap();
    commands::cmd_tx_add(&db, "2025-05-02", "Aseo", 30.0, "other").unwrap();

    let id = db.load_transactions().unwrap()[0].id;
    commands::cmd_tx_delete(&db, id).unwrap();

    let remaining = db.load_transactions().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].category, "Aseo");

    // Unknown id fails without touching the table
    assert!(commands::cmd_tx_delete(&db, 9999).is_err());
    assert_eq!(db.load_transactions().unwrap().len(), 1);
}

#[test]
fn test_cmd_budget_set_updates_or_appends() {
    let db = setup_seeded_db();
    let before = db.load_budget().unwrap().len();

    // Existing category is updated in place
    commands::cmd_budget_set(&db, "Renta", 2500.0).unwrap();
    let budget = db.load_budget().unwrap();
    assert_eq!(budget.len(), before);
    let renta = budget.iter().find(|l| l.category == "Renta").unwrap();
    assert_eq!(renta.assigned, 2500.0);

    // New category is appended
    commands::cmd_budget_set(&db, "Mascotas", 300.0).unwrap();
    assert_eq!(db.load_budget().unwrap().len(), before + 1);
}

#[test]
fn test_cmd_income_set() {
    let db = setup_seeded_db();

    commands::cmd_income_set(&db, "Salario", 15000.0).unwrap();
    let income = db.load_income().unwrap();
    assert_eq!(income.len(), 2);
    assert_eq!(
        income.iter().find(|s| s.source == "Salario").unwrap().amount,
        15000.0
    );
}

// ========== Report Command Tests ==========

#[test]
fn test_report_commands_on_seeded_db() {
    let db = setup_seeded_db();

    assert!(commands::cmd_dashboard(&db, false).is_ok());
    assert!(commands::cmd_dashboard(&db, true).is_ok());
    assert!(commands::cmd_weekly(&db).is_ok());
    assert!(commands::cmd_budget_report(&db).is_ok());
    assert!(commands::cmd_pivot(&db).is_ok());
    assert!(commands::cmd_forecast(&db, 4).is_ok());
}

#[test]
fn test_report_commands_on_empty_db() {
    let db = Database::in_memory().unwrap();

    assert!(commands::cmd_dashboard(&db, false).is_ok());
    assert!(commands::cmd_weekly(&db).is_ok());
    assert!(commands::cmd_budget_report(&db).is_ok());
    assert!(commands::cmd_pivot(&db).is_ok());
    assert!(commands::cmd_forecast(&db, 4).is_ok());
}

#[test]
fn test_reports_tolerate_malformed_dates() {
    let db = setup_seeded_db();

    // Simulate a stored row whose date text has gone bad
    let conn = db.conn().unwrap();
    conn.execute(
        "INSERT INTO transactions (date, category, amount, kind) VALUES (?1, 'Renta', 10.0, 'card')",
        rusqlite::params!["31-02-2025"],
    )
    .unwrap();
    drop(conn);

    assert!(commands::cmd_weekly(&db).is_ok());
    assert!(commands::cmd_dashboard(&db, false).is_ok());
    assert!(commands::cmd_forecast(&db, 2).is_ok());
}

// ========== Export Command Tests ==========

#[test]
fn test_cmd_export_writes_file() {
    let db = setup_seeded_db();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budget.csv");

    commands::cmd_export(&db, "budget", "csv", Some(&path)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("category,assigned\n"));
    assert!(contents.contains("Renta,2000.0"));
}

#[test]
fn test_cmd_export_rejects_unknown_inputs() {
    let db = setup_seeded_db();

    assert!(commands::cmd_export(&db, "receipts", "csv", None).is_err());
    assert!(commands::cmd_export(&db, "budget", "xml", None).is_err());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 25), "short");
    assert_eq!(truncate("Deudas/Pagos Recurrentes!!", 25), "Deudas/Pagos Recurrent...");
    // Multi-byte characters are cut on char boundaries
    assert_eq!(truncate("Pago mensual señora", 25), "Pago mensual señora");
}
