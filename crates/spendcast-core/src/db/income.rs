//! Income source table operations

use rusqlite::params;
use tracing::info;

use super::Database;
use crate::error::Result;
use crate::models::{IncomeSource, NewIncomeSource};

const TABLE: &str = "income_sources";
const COLUMNS: &[&str] = &["id", "source", "amount"];

impl Database {
    /// Load the full income snapshot, ascending by storage id
    pub fn load_income(&self) -> Result<Vec<IncomeSource>> {
        let conn = self.conn()?;
        self.verify_columns(&conn, TABLE, COLUMNS)?;

        let mut stmt =
            conn.prepare("SELECT id, source, amount FROM income_sources ORDER BY id")?;
        let sources = stmt
            .query_map([], |row| {
                Ok(IncomeSource {
                    id: row.get(0)?,
                    source: row.get(1)?,
                    amount: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(sources)
    }

    /// Destructively replace the income table with the supplied snapshot
    pub fn replace_income(&self, rows: &[NewIncomeSource]) -> Result<()> {
        let mut conn = self.conn()?;
        self.verify_columns(&conn, TABLE, COLUMNS)?;

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM income_sources", [])?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO income_sources (source, amount) VALUES (?1, ?2)")?;
            for row in rows {
                stmt.execute(params![row.source, row.amount])?;
            }
        }
        tx.commit()?;

        info!(rows = rows.len(), "Replaced income table");
        Ok(())
    }

    /// Insert generator output when the table is empty; returns whether
    /// seeding happened
    pub fn seed_income_if_empty<F>(&self, generator: F) -> Result<bool>
    where
        F: FnOnce() -> Vec<NewIncomeSource>,
    {
        let conn = self.conn()?;
        self.verify_columns(&conn, TABLE, COLUMNS)?;
        if self.table_len(&conn, TABLE)? > 0 {
            return Ok(false);
        }
        drop(conn);

        let rows = generator();
        self.replace_income(&rows)?;
        info!(rows = rows.len(), "Seeded income table");
        Ok(true)
    }
}
