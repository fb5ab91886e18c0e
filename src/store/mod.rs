//! Per-user progress store: mastery state over a persisted envelope.
//!
//! The whole envelope is read on load and rewritten on every mutation.
//! Mutations run on the caller's task; there is no coordination against
//! concurrent writers because only one screen mutates progress at a time.
//! Every failure degrades to "progress not recorded" - nothing in this
//! module returns an error to the caller.

mod saved;
mod sessions;

pub use saved::SavedStore;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardProgress, MasteryStatus, OpenSession, StudySession};
use crate::storage::{LogOnError, StorageBackend};

/// Everything persisted for one user: mastery entries keyed by
/// (deck id, card id) plus the study session log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressEnvelope {
  #[serde(default)]
  pub progress: HashMap<String, HashMap<String, CardProgress>>,
  #[serde(default)]
  pub sessions: Vec<StudySession>,
}

/// Progress store with an explicit load/persist lifecycle.
///
/// Screens hold a reference to one store instance; there is no ambient
/// global state.
pub struct ProgressStore {
  backend: Box<dyn StorageBackend>,
  key: String,
  envelope: ProgressEnvelope,
  open_session: Option<OpenSession>,
}

impl ProgressStore {
  pub fn new(backend: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
    Self {
      backend,
      key: key.into(),
      envelope: ProgressEnvelope::default(),
      open_session: None,
    }
  }

  /// Read the persisted envelope into memory.
  ///
  /// Missing or corrupt data initializes an empty envelope; the learning
  /// flow never blocks on telemetry state.
  pub async fn load(&mut self) {
    let stored = self
      .backend
      .read(&self.key)
      .log_warn("Failed to read progress envelope")
      .flatten();

    self.envelope = match stored {
      Some(raw) => {
        serde_json::from_str(&raw).log_warn_default("Discarding corrupt progress envelope")
      }
      None => ProgressEnvelope::default(),
    };
  }

  /// Rewrite the whole envelope. Write failures are logged and swallowed.
  pub(crate) async fn persist(&self) {
    let payload = match serde_json::to_string(&self.envelope) {
      Ok(payload) => payload,
      Err(e) => {
        tracing::warn!("Failed to serialize progress envelope: {}", e);
        return;
      }
    };

    let _ = self
      .backend
      .write(&self.key, &payload)
      .log_warn("Failed to persist progress envelope");
  }

  /// Mark a card mastered, or reset a mastered card back to learning.
  ///
  /// Un-mastering never restores `new`: the card has been interacted with,
  /// so `false` always lands on `learning`. Idempotent.
  pub async fn set_mastered(&mut self, deck_id: &str, card_id: &str, value: bool) {
    let entry = self.entry(deck_id, card_id);
    if value {
      entry.transition(MasteryStatus::Mastered);
    } else if entry.status == MasteryStatus::Mastered {
      entry.transition(MasteryStatus::Learning);
    }
    self.persist().await;
  }

  /// Mark a card as being learned; `false` returns a learning card to `new`.
  ///
  /// Last write wins between this and `set_mastered`.
  pub async fn set_learning(&mut self, deck_id: &str, card_id: &str, value: bool) {
    let entry = self.entry(deck_id, card_id);
    if value {
      entry.transition(MasteryStatus::Learning);
    } else if entry.status == MasteryStatus::Learning {
      entry.transition(MasteryStatus::New);
    }
    self.persist().await;
  }

  /// Number of `cards` currently mastered in `deck_id`.
  ///
  /// Cards with no entry count as new.
  pub fn deck_progress(&self, deck_id: &str, cards: &[Card]) -> usize {
    let Some(deck) = self.envelope.progress.get(deck_id) else {
      return 0;
    };

    cards
      .iter()
      .filter(|card| {
        deck
          .get(&card.id)
          .map(|progress| progress.status == MasteryStatus::Mastered)
          .unwrap_or(false)
      })
      .count()
  }

  /// Number of tracked cards in `deck_id` with the given status.
  pub fn count_by_status(&self, deck_id: &str, status: MasteryStatus) -> usize {
    self
      .envelope
      .progress
      .get(deck_id)
      .map(|deck| {
        deck
          .values()
          .filter(|progress| progress.status == status)
          .count()
      })
      .unwrap_or(0)
  }

  /// Full data wipe: the only path that removes progress entries.
  pub async fn clear_all(&mut self) {
    self.envelope = ProgressEnvelope::default();
    self.open_session = None;
    let _ = self
      .backend
      .delete(&self.key)
      .log_warn("Failed to delete progress envelope");
  }

  pub fn envelope(&self) -> &ProgressEnvelope {
    &self.envelope
  }

  fn entry(&mut self, deck_id: &str, card_id: &str) -> &mut CardProgress {
    self
      .envelope
      .progress
      .entry(deck_id.to_string())
      .or_default()
      .entry(card_id.to_string())
      .or_default()
  }
}
