//! Transaction table operations

use rusqlite::params;
use tracing::info;

use super::{parse_date, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};

const TABLE: &str = "transactions";
const COLUMNS: &[&str] = &["id", "date", "category", "amount", "kind"];

impl Database {
    /// Load the full transaction snapshot, ascending by storage id
    pub fn load_transactions(&self) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        self.verify_columns(&conn, TABLE, COLUMNS)?;

        let mut stmt =
            conn.prepare("SELECT id, date, category, amount, kind FROM transactions ORDER BY id")?;
        let raw: Vec<(i64, Option<String>, String, f64, String)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(|(id, date, category, amount, kind)| {
                Ok(Transaction {
                    id,
                    date: date.as_deref().and_then(parse_date),
                    category,
                    amount,
                    kind: kind.parse().map_err(Error::InvalidData)?,
                })
            })
            .collect()
    }

    /// Destructively replace the transaction table with the supplied snapshot
    pub fn replace_transactions(&self, rows: &[NewTransaction]) -> Result<()> {
        let mut conn = self.conn()?;
        self.verify_columns(&conn, TABLE, COLUMNS)?;

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM transactions", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO transactions (date, category, amount, kind) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.date.map(|d| d.to_string()),
                    row.category,
                    row.amount,
                    row.kind.as_str(),
                ])?;
            }
        }
        tx.commit()?;

        info!(rows = rows.len(), "Replaced transactions table");
        Ok(())
    }

    /// Insert generator output when the table is empty; returns whether
    /// seeding happened
    pub fn seed_transactions_if_empty<F>(&self, generator: F) -> Result<bool>
    where
        F: FnOnce() -> Vec<NewTransaction>,
    {
        let conn = self.conn()?;
        self.verify_columns(&conn, TABLE, COLUMNS)?;
        if self.table_len(&conn, TABLE)? > 0 {
            return Ok(false);
        }
        drop(conn);

        let rows = generator();
        self.replace_transactions(&rows)?;
        info!(rows = rows.len(), "Seeded transactions table");
        Ok(true)
    }
}
