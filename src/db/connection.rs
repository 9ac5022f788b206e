use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::ServerError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

// Thread-local connection slots, one per database path.
thread_local! {
    static DB_CONNS: RefCell<HashMap<PathBuf, Connection>> = RefCell::new(HashMap::new());
}

/// Cheap handle (path only); connections are opened lazily per worker thread.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONNS
            .try_with(|cell| {
                let mut slots = cell.borrow_mut();
                if !slots.contains_key(&self.path) {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
                    conn.execute_batch("PRAGMA foreign_keys = ON;")
                        .map_err(|e| ServerError::DbError(format!("Enable FKs failed: {e}")))?;
                    tracing::debug!(path = %self.path.display(), "opened sqlite connection");
                    slots.insert(self.path.clone(), conn);
                }
                let conn = slots
                    .get_mut(&self.path)
                    .ok_or(ServerError::InternalError)?;
                f(conn)
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

/// Apply the bundled schema (idempotent: every statement is `if not exists` / `or ignore`).
pub fn init_db(db: &Database) -> Result<(), ServerError> {
    apply_schema_sql(db, SCHEMA_SQL)?;
    tracing::info!(path = %db.path().display(), "database initialized");
    Ok(())
}

pub fn apply_schema_sql(db: &Database, schema_sql: &str) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute_batch(schema_sql)
            .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))
    })
}

/// Schema-initialized database in a temp file, removed again on drop.
#[cfg(test)]
pub(crate) struct TempDb {
    db: Database,
}

#[cfg(test)]
impl TempDb {
    pub(crate) fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "realty_{name}_{}.sqlite",
            std::process::id()
        ));
        remove_db_files(&path);
        let db = Database::new(path);
        init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
        Self { db }
    }

    pub(crate) fn db(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
impl Drop for TempDb {
    fn drop(&mut self) {
        // Close this thread's handle before the file goes away.
        let _ = DB_CONNS.try_with(|cell| cell.borrow_mut().remove(&self.db.path));
        remove_db_files(&self.db.path);
    }
}

#[cfg(test)]
fn remove_db_files(path: &Path) {
    let _ = std::fs::remove_file(path);
    for suffix in ["-journal", "-wal", "-shm"] {
        let mut side = path.as_os_str().to_owned();
        side.push(suffix);
        let _ = std::fs::remove_file(side);
    }
}
