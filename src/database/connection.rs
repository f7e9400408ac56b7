//! The SQLite file behind [`SqliteStore`](crate::storage::SqliteStore).

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;

use super::migrations;
use crate::types::errors::StoreError;

/// A migrated connection plus where it lives (`None` for in-memory).
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Opens or creates the database file at `path`, creating its parent
    /// directory first, and brings the schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Self::migrated(Connection::open(path)?, Some(path.to_path_buf()))
    }

    /// Same schema, nothing on disk.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::migrated(Connection::open_in_memory()?, None)
    }

    fn migrated(conn: Connection, path: Option<PathBuf>) -> Result<Self, StoreError> {
        migrations::run_all(&conn)?;
        tracing::debug!(
            path = ?path,
            version = migrations::get_schema_version(&conn),
            "database ready"
        );
        Ok(Self { conn, path })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn schema_version(&self) -> i32 {
        migrations::get_schema_version(&self.conn)
    }
}
