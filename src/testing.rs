//! Test utilities for store setup.
//!
//! Provides helpers over a shared temporary database so tests never
//! duplicate backend wiring.

use std::path::PathBuf;
use tempfile::TempDir;

use crate::domain::{Card, Deck};
use crate::storage::{saved_key, storage_key, Result, SqliteBackend};
use crate::store::{ProgressStore, SavedStore};

/// Test environment with a SQLite-backed store in a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    db_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new()?;
        let db_path = temp.path().join("progress.db");
        Ok(Self { temp, db_path })
    }

    /// A fresh store over the shared database; call again to model an app
    /// restart for reload tests.
    pub fn store(&self) -> ProgressStore {
        let backend = SqliteBackend::open(&self.db_path).expect("open test database");
        ProgressStore::new(Box::new(backend), storage_key("test-user"))
    }

    /// A fresh saved-items store over the shared database.
    pub fn saved_store(&self) -> SavedStore {
        let backend = SqliteBackend::open(&self.db_path).expect("open test database");
        SavedStore::new(Box::new(backend), saved_key("test-user"))
    }
}

/// Deck definition with placeholder card faces.
pub fn deck(id: &str, card_ids: &[&str]) -> Deck {
    Deck {
        id: id.to_string(),
        title: format!("{id} deck"),
        description: String::new(),
        cards: card_ids
            .iter()
            .map(|card_id| Card {
                id: (*card_id).to_string(),
                front: format!("front {card_id}"),
                back: format!("back {card_id}"),
                has_audio: None,
            })
            .collect(),
    }
}
