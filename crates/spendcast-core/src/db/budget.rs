//! Budget line table operations

use rusqlite::params;
use tracing::info;

use super::Database;
use crate::error::Result;
use crate::models::{BudgetLine, NewBudgetLine};

const TABLE: &str = "budget_lines";
const COLUMNS: &[&str] = &["id", "category", "assigned"];

impl Database {
    /// Load the full budget snapshot, ascending by storage id
    pub fn load_budget(&self) -> Result<Vec<BudgetLine>> {
        let conn = self.conn()?;
        self.verify_columns(&conn, TABLE, COLUMNS)?;

        let mut stmt =
            conn.prepare("SELECT id, category, assigned FROM budget_lines ORDER BY id")?;
        let lines = stmt
            .query_map([], |row| {
                Ok(BudgetLine {
                    id: row.get(0)?,
                    category: row.get(1)?,
                    assigned: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(lines)
    }

    /// Destructively replace the budget table with the supplied snapshot
    pub fn replace_budget(&self, rows: &[NewBudgetLine]) -> Result<()> {
        let mut conn = self.conn()?;
        self.verify_columns(&conn, TABLE, COLUMNS)?;

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM budget_lines", [])?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO budget_lines (category, assigned) VALUES (?1, ?2)")?;
            for row in rows {
                stmt.execute(params![row.category, row.assigned])?;
            }
        }
        tx.commit()?;

        info!(rows = rows.len(), "Replaced budget table");
        Ok(())
    }

    /// Insert generator output when the table is empty; returns whether
    /// seeding happened
    pub fn seed_budget_if_empty<F>(&self, generator: F) -> Result<bool>
    where
        F: FnOnce() -> Vec<NewBudgetLine>,
    {
        let conn = self.conn()?;
        self.verify_columns(&conn, TABLE, COLUMNS)?;
        if self.table_len(&conn, TABLE)? > 0 {
            return Ok(false);
        }
        drop(conn);

        let rows = generator();
        self.replace_budget(&rows)?;
        info!(rows = rows.len(), "Seeded budget table");
        Ok(true)
    }
}
