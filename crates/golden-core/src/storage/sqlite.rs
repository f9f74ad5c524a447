//! SQLite slot storage
//!
//! Keeps every collection slot as a row of the `slots` table in a single
//! database file. Writes are upserts, so each save replaces the whole
//! collection just like the file backend.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::schema::{init_schema, needs_init};
use super::{CollectionKey, Repository, StorageError, StorageResult};

/// Repository backed by a SQLite database
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open or create the database at `path`
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StorageResult<Self> {
        if needs_init(&conn) {
            init_schema(&conn)?;
        }
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Repository for SqliteRepository {
    fn read_slot(&self, key: CollectionKey) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?",
                params![key.slot_name()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&mut self, key: CollectionKey, payload: &str) -> StorageResult<()> {
        debug!(slot = key.slot_name(), bytes = payload.len(), "writing slot row");
        self.conn.execute(
            r#"
            INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            params![key.slot_name(), payload, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn clear(&mut self) -> StorageResult<()> {
        self.conn.execute("DELETE FROM slots", [])?;
        Ok(())
    }
}
