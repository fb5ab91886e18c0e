use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LanguageCode;

/// Where a saved item was bookmarked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavedSource {
  Deck,
  Dictionary,
}

impl SavedSource {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Deck => "deck",
      Self::Dictionary => "dictionary",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "deck" => Some(Self::Deck),
      "dictionary" => Some(Self::Dictionary),
      _ => None,
    }
  }
}

/// A card or dictionary entry the user bookmarked to their profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
  pub id: String,
  pub prompt: String,
  pub answer: String,
  pub language: LanguageCode,
  pub explanation: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
  pub source: SavedSource,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub deck_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub card_id: Option<String>,
  pub created_at: DateTime<Utc>,
}

/// Input for a new saved item; the store assigns the id and timestamp.
#[derive(Debug, Clone)]
pub struct SavedDraft {
  pub prompt: String,
  pub answer: String,
  pub language: LanguageCode,
  pub explanation: String,
  pub notes: Option<String>,
  pub source: SavedSource,
  pub deck_id: Option<String>,
  pub card_id: Option<String>,
}

impl SavedItem {
  pub fn create(draft: SavedDraft) -> Self {
    Self {
      id: generate_item_id(),
      prompt: draft.prompt,
      answer: draft.answer,
      language: draft.language,
      explanation: draft.explanation,
      notes: draft.notes,
      source: draft.source,
      deck_id: draft.deck_id,
      card_id: draft.card_id,
      created_at: Utc::now(),
    }
  }
}

/// Generate a saved-item ID
pub fn generate_item_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..12)
    .map(|_| {
      let idx: u8 = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}
