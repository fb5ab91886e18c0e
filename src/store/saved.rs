//! Saved items: cards and dictionary entries bookmarked to the profile.
//!
//! Same lifecycle as the progress store: one serialized list per user,
//! loaded whole and rewritten on every mutation. Failures degrade to
//! "not saved".

use crate::domain::{SavedDraft, SavedItem};
use crate::storage::{LogOnError, StorageBackend};

pub struct SavedStore {
  backend: Box<dyn StorageBackend>,
  key: String,
  items: Vec<SavedItem>,
}

impl SavedStore {
  pub fn new(backend: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
    Self {
      backend,
      key: key.into(),
      items: Vec::new(),
    }
  }

  /// Read the persisted item list; missing or corrupt data yields an
  /// empty list.
  pub async fn load(&mut self) {
    let stored = self
      .backend
      .read(&self.key)
      .log_warn("Failed to read saved items")
      .flatten();

    self.items = match stored {
      Some(raw) => serde_json::from_str(&raw).log_warn_default("Discarding corrupt saved items"),
      None => Vec::new(),
    };
  }

  /// Rewrite the whole list. Write failures are logged and swallowed.
  async fn persist(&self) {
    let payload = match serde_json::to_string(&self.items) {
      Ok(payload) => payload,
      Err(e) => {
        tracing::warn!("Failed to serialize saved items: {}", e);
        return;
      }
    };

    let _ = self
      .backend
      .write(&self.key, &payload)
      .log_warn("Failed to persist saved items");
  }

  /// Append a new item and persist; returns the stored item with its
  /// assigned id and timestamp.
  ///
  /// Duplicates are allowed: the surfaces that call this track their own
  /// saved markers and simply stop offering the button.
  pub async fn save_item(&mut self, draft: SavedDraft) -> SavedItem {
    let item = SavedItem::create(draft);
    self.items.push(item.clone());
    self.persist().await;
    item
  }

  /// Remove an item by id and persist. Unknown ids are a no-op.
  pub async fn remove_item(&mut self, id: &str) {
    self.items.retain(|item| item.id != id);
    self.persist().await;
  }

  /// Full wipe of the saved list.
  pub async fn clear_all(&mut self) {
    self.items.clear();
    let _ = self
      .backend
      .delete(&self.key)
      .log_warn("Failed to delete saved items");
  }

  /// Saved items in insertion order (most recent last).
  pub fn items(&self) -> &[SavedItem] {
    &self.items
  }
}
