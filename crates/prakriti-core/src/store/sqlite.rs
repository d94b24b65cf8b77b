//! SQLite-backed record store.

use std::path::Path;

use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

use super::{RecordStore, StoreResult};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Durable store over a single key-value table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `path`, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}

impl RecordStore for SqliteStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        let lookup = self
            .conn
            .query_row("SELECT value FROM records WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional();

        match lookup {
            Ok(value) => value,
            Err(e) => {
                warn!("read of {} failed, treating as absent: {}", key, e);
                None
            }
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO records (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.conn.execute("DELETE FROM records WHERE key = ?", [key]) {
            warn!("delete of {} failed: {}", key, e);
        }
    }
}
