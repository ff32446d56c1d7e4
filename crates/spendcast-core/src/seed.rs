//! Synthetic seed data for first run
//!
//! The store seeds these defaults into any table that is empty on startup so
//! a fresh database renders a populated dashboard immediately. Rows are fixed
//! literals, so seeding is deterministic.

use chrono::NaiveDate;

use crate::models::{NewBudgetLine, NewIncomeSource, NewTransaction, SpendKind};

/// The monthly budget vocabulary and ceilings
const BUDGET: &[(&str, f64)] = &[
    ("Impuestos", 700.0),
    ("Renta", 2000.0),
    ("Transporte", 150.0),
    ("Carro", 1000.0),
    ("Gasolina", 1000.0),
    ("Comida Trabajo", 900.0),
    ("Comida Casa", 1500.0),
    ("Medicinas", 1500.0),
    ("Suplementos", 500.0),
    ("Gimnasio", 250.0),
    ("Aseo", 500.0),
    ("Internet", 100.0),
    ("Celular", 200.0),
    ("Suscripciones", 250.0),
    ("Pago mensual señora", 1500.0),
    ("Novia", 1000.0),
    ("Ahorro", 2000.0),
    ("Deudas/Pagos Recurrentes", 800.0),
];

/// Sample expenses spread over March and April 2025, drawn from the budget
/// vocabulary
const TRANSACTIONS: &[(i32, u32, u32, &str, f64, SpendKind)] = &[
    (2025, 3, 1, "Renta", 485.0, SpendKind::Other),
    (2025, 3, 3, "Comida Casa", 214.0, SpendKind::Card),
    (2025, 3, 5, "Gasolina", 390.0, SpendKind::Card),
    (2025, 3, 8, "Comida Trabajo", 96.0, SpendKind::Card),
    (2025, 3, 9, "Suplementos", 260.0, SpendKind::Other),
    (2025, 3, 12, "Transporte", 54.0, SpendKind::Other),
    (2025, 3, 14, "Medicinas", 330.0, SpendKind::Card),
    (2025, 3, 17, "Internet", 100.0, SpendKind::Other),
    (2025, 3, 19, "Comida Casa", 178.0, SpendKind::Card),
    (2025, 3, 22, "Gimnasio", 250.0, SpendKind::Other),
    (2025, 3, 25, "Aseo", 132.0, SpendKind::Card),
    (2025, 3, 28, "Novia", 420.0, SpendKind::Card),
    (2025, 4, 1, "Impuestos", 465.0, SpendKind::Other),
    (2025, 4, 4, "Celular", 200.0, SpendKind::Card),
    (2025, 4, 7, "Comida Trabajo", 88.0, SpendKind::Card),
    (2025, 4, 11, "Carro", 495.0, SpendKind::Other),
    (2025, 4, 15, "Suscripciones", 119.0, SpendKind::Card),
    (2025, 4, 18, "Comida Casa", 241.0, SpendKind::Card),
    (2025, 4, 23, "Deudas/Pagos Recurrentes", 380.0, SpendKind::Other),
    (2025, 4, 27, "Ahorro", 450.0, SpendKind::Other),
];

/// Default expense rows for an empty transactions table
pub fn default_transactions() -> Vec<NewTransaction> {
    TRANSACTIONS
        .iter()
        .map(|&(year, month, day, category, amount, kind)| NewTransaction {
            date: NaiveDate::from_ymd_opt(year, month, day),
            category: category.to_string(),
            amount,
            kind,
        })
        .collect()
}

/// Default budget rows for an empty budget table
pub fn default_budget() -> Vec<NewBudgetLine> {
    BUDGET
        .iter()
        .map(|&(category, assigned)| NewBudgetLine {
            category: category.to_string(),
            assigned,
        })
        .collect()
}

/// Default income rows: fixed salary plus a flexible remainder
pub fn default_income() -> Vec<NewIncomeSource> {
    vec![
        NewIncomeSource {
            source: "Salario".to_string(),
            amount: 14000.0,
        },
        NewIncomeSource {
            source: "Flexible".to_string(),
            amount: 1000.0,
        },
    ]
}
