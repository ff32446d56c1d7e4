//! Record store: SQLite access with connection pooling and migrations
//!
//! This module is organized by table:
//! - `transactions` - Expense transaction snapshot load / replace / seed
//! - `budget` - Budget line snapshot load / replace / seed
//! - `income` - Income source snapshot load / replace / seed
//!
//! Every table follows the same full-snapshot protocol: `load_*` reads the
//! whole table, `replace_*` destructively replaces it with the supplied
//! snapshot, `seed_*_if_empty` inserts generator output only when the table
//! has no rows. There is no transaction spanning the three tables.

use chrono::NaiveDate;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::{Error, Result};

mod budget;
mod income;
mod transactions;


pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a stored date string into a `NaiveDate`.
///
/// Unparseable text is coerced to `None` rather than an error; such rows are
/// excluded from weekly grouping only.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Open (creating if needed) the database at `path` and run migrations
    pub fn new(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Note: Uses a temporary file rather than `:memory:` because each pool
    /// connection would otherwise see its own empty in-memory database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = format!(
            "{}/spendcast_test_{}_{}.db",
            std::env::temp_dir().display(),
            std::process::id(),
            id
        );

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::new(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- WAL mode: readers don't block the writer
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: safe for most power-loss scenarios
            PRAGMA synchronous = NORMAL;

            -- Expense transactions. The date is stored as text so that
            -- malformed values survive a round trip as NULL instead of
            -- failing the whole table.
            CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY,
                date TEXT,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                kind TEXT NOT NULL DEFAULT 'other'
            );

            -- Monthly budget, one row per category by convention
            CREATE TABLE IF NOT EXISTS budget_lines (
                id INTEGER PRIMARY KEY,
                category TEXT NOT NULL,
                assigned REAL NOT NULL DEFAULT 0
            );

            -- Income sources (salary, flexible, ...)
            CREATE TABLE IF NOT EXISTS income_sources (
                id INTEGER PRIMARY KEY,
                source TEXT NOT NULL,
                amount REAL NOT NULL
            );
            "#,
        )?;

        info!("Database migrations complete");
        Ok(())
    }

    /// Check a table's stored column set against the expected schema.
    ///
    /// Writing a snapshot whose shape differs from the stored table would
    /// silently produce mismatched columns; instead every load and replace
    /// fails loudly when the table has drifted.
    pub(crate) fn verify_columns(
        &self,
        conn: &DbConn,
        table: &str,
        expected: &[&str],
    ) -> Result<()> {
        let mut stmt =
            conn.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")?;
        let found: Vec<String> = stmt
            .query_map([table], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if found.iter().map(String::as_str).ne(expected.iter().copied()) {
            return Err(Error::SchemaMismatch {
                table: table.to_string(),
                expected: expected.join(", "),
                found: found.join(", "),
            });
        }
        Ok(())
    }

    /// Row count of a table, for emptiness checks before seeding
    pub(crate) fn table_len(&self, conn: &DbConn, table: &str) -> Result<i64> {
        // Table names come from the fixed set above, never from user input
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }
}
