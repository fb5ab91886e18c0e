//! Persistent store adapter: whole-value key-value persistence.
//!
//! The progress envelope lives under a single key per user. Backends read
//! and rewrite the entire value; there are no partial updates and no
//! transactions.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use thiserror::Error;

/// Storage key holding a user's serialized progress envelope.
pub fn storage_key(user_id: &str) -> String {
    format!("flashcard_progress:user:{user_id}")
}

/// Storage key holding a user's saved-items list.
pub fn saved_key(user_id: &str) -> String {
    format!("saved_items:user:{user_id}")
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key-value persistence for serialized envelopes.
pub trait StorageBackend: Send {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

/// Extension trait for logging errors before discarding them.
///
/// Storage failures degrade to "progress not recorded"; they are logged at
/// warn level and never surfaced to the caller.
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
    /// Log the error at warn level and return the default
    fn log_warn_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn log_warn_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_format() {
        assert_eq!(storage_key("alice"), "flashcard_progress:user:alice");
        assert_eq!(storage_key("default"), "flashcard_progress:user:default");
    }

    #[test]
    fn test_saved_key_format() {
        assert_eq!(saved_key("alice"), "saved_items:user:alice");
    }

    #[test]
    fn test_log_warn_maps_err_to_none() {
        let ok: std::result::Result<i64, StorageError> = Ok(7);
        assert_eq!(ok.log_warn("read"), Some(7));

        let err: std::result::Result<i64, StorageError> = Err(StorageError::Unavailable);
        assert_eq!(err.log_warn("read"), None);
    }

    #[test]
    fn test_log_warn_default_maps_err_to_default() {
        let err: std::result::Result<Vec<String>, StorageError> = Err(StorageError::Unavailable);
        assert!(err.log_warn_default("read").is_empty());
    }
}
