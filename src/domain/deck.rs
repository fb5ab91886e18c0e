use serde::{Deserialize, Serialize};

/// A single front/back learning unit within a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
  pub id: String,
  pub front: String,
  pub back: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub has_audio: Option<bool>,
}

/// A named collection of flashcards for one content language.
///
/// Deck definitions are supplied by the content registry; this crate only
/// consumes them to resolve card lists and display titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
  pub id: String,
  pub title: String,
  pub description: String,
  pub cards: Vec<Card>,
}

/// Selected content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
  Dz,
  Qu,
}

impl LanguageCode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Dz => "dz",
      Self::Qu => "qu",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "dz" => Some(Self::Dz),
      "qu" => Some(Self::Qu),
      _ => None,
    }
  }

  /// Namespace a deck id by language, e.g. "dz:animals-basic".
  ///
  /// Progress is keyed by the namespaced id so the same base deck shipped
  /// for two languages never shares entries.
  pub fn deck_id(&self, base: &str) -> String {
    format!("{}:{}", self.as_str(), base)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_language_code_as_str() {
    assert_eq!(LanguageCode::Dz.as_str(), "dz");
    assert_eq!(LanguageCode::Qu.as_str(), "qu");
  }

  #[test]
  fn test_language_code_from_str() {
    assert_eq!(LanguageCode::from_str("dz"), Some(LanguageCode::Dz));
    assert_eq!(LanguageCode::from_str("qu"), Some(LanguageCode::Qu));
    assert_eq!(LanguageCode::from_str("en"), None);
    assert_eq!(LanguageCode::from_str(""), None);
    assert_eq!(LanguageCode::from_str("DZ"), None);
  }

  #[test]
  fn test_language_code_roundtrip() {
    for lang in [LanguageCode::Dz, LanguageCode::Qu] {
      assert_eq!(LanguageCode::from_str(lang.as_str()), Some(lang));
    }
  }

  #[test]
  fn test_namespaced_deck_id() {
    assert_eq!(LanguageCode::Dz.deck_id("animals-basic"), "dz:animals-basic");
    assert_eq!(LanguageCode::Qu.deck_id("animals-basic"), "qu:animals-basic");
  }

  #[test]
  fn test_deck_deserializes_from_registry_json() {
    let raw = r#"{
      "id": "animals-basic",
      "title": "Animals",
      "description": "Basic animal words",
      "cards": [
        { "id": "card1", "front": "dog", "back": "khyi", "hasAudio": true },
        { "id": "card2", "front": "bird", "back": "bya" }
      ]
    }"#;

    let deck: Deck = serde_json::from_str(raw).unwrap();
    assert_eq!(deck.id, "animals-basic");
    assert_eq!(deck.cards.len(), 2);
    assert_eq!(deck.cards[0].has_audio, Some(true));
    assert!(deck.cards[1].has_audio.is_none());
  }
}
