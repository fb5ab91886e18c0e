//! SQLite-backed key-value storage.
//!
//! Stands in for the platform key-value stores the mobile client uses
//! (local storage on web, secure storage on native): one row per key, the
//! whole value replaced on every write.

use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{Result, StorageBackend, StorageError};

#[derive(Clone)]
pub struct SqliteBackend {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBackend {
    /// Open (or create) the backing database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a database that lives only as long as the process.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::Unavailable)
    }
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )
}

impl StorageBackend for SqliteBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT value FROM kv_store WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_reads_none() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        assert_eq!(backend.read("absent").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        backend.write("k", "v1").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v1"));
    }

    #[test]
    fn test_write_replaces_whole_value() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        backend.write("k", "v1").unwrap();
        backend.write("k", "v2").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_delete_removes_key() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        backend.write("k", "v").unwrap();
        backend.delete("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);

        // Deleting an absent key is not an error
        backend.delete("k").unwrap();
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("progress.db");
        let backend = SqliteBackend::open(&path).unwrap();
        backend.write("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("progress.db");

        {
            let backend = SqliteBackend::open(&path).unwrap();
            backend.write("k", "persisted").unwrap();
        }

        let backend = SqliteBackend::open(&path).unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("persisted"));
    }
}
