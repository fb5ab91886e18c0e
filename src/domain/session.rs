use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One bounded interval of interaction with a deck, summarized on completion.
///
/// Appended to the session log when the study screen closes; never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
  pub deck_id: String,
  pub start_time: DateTime<Utc>,
  pub end_time: DateTime<Utc>,
  pub time_spent_ms: i64,
  pub total_cards: usize,
  pub mastered_cards: usize,
  pub learning_cards: usize,
}

/// An in-flight session, opened when a study screen mounts.
///
/// Sessions are best-effort telemetry: an open session abandoned by an
/// abnormal termination is simply replaced by the next `begin`.
#[derive(Debug, Clone)]
pub struct OpenSession {
  pub deck_id: String,
  pub start_time: DateTime<Utc>,
  pub total_cards: usize,
}

impl OpenSession {
  pub fn begin(deck_id: &str, total_cards: usize) -> Self {
    Self {
      deck_id: deck_id.to_string(),
      start_time: Utc::now(),
      total_cards,
    }
  }

  /// Close the session with the counts observed at the end.
  ///
  /// The wall clock may step backwards between begin and finish; a session
  /// never reports `end_time` before `start_time`. Counts are clamped so
  /// `mastered_cards + learning_cards` never exceeds `total_cards` even when
  /// stale entries outlive a shrunk deck.
  pub fn finish(self, mastered_cards: usize, learning_cards: usize) -> StudySession {
    let end_time = Utc::now().max(self.start_time);
    let time_spent_ms = (end_time - self.start_time).num_milliseconds();
    let mastered_cards = mastered_cards.min(self.total_cards);
    let learning_cards = learning_cards.min(self.total_cards - mastered_cards);

    StudySession {
      deck_id: self.deck_id,
      start_time: self.start_time,
      end_time,
      time_spent_ms,
      total_cards: self.total_cards,
      mastered_cards,
      learning_cards,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_finish_empty_session() {
    let session = OpenSession::begin("dz:animals-basic", 3).finish(0, 0);
    assert_eq!(session.deck_id, "dz:animals-basic");
    assert_eq!(session.total_cards, 3);
    assert_eq!(session.mastered_cards, 0);
    assert_eq!(session.learning_cards, 0);
    assert!(session.time_spent_ms >= 0);
    assert!(session.end_time >= session.start_time);
  }

  #[test]
  fn test_finish_keeps_counts_within_deck_size() {
    let session = OpenSession::begin("dz:animals-basic", 3).finish(2, 1);
    assert_eq!(session.mastered_cards, 2);
    assert_eq!(session.learning_cards, 1);
  }

  #[test]
  fn test_finish_clamps_oversized_counts() {
    let session = OpenSession::begin("dz:animals-basic", 2).finish(3, 3);
    assert_eq!(session.mastered_cards, 2);
    assert_eq!(session.learning_cards, 0);
    assert!(session.mastered_cards + session.learning_cards <= session.total_cards);
  }

  #[test]
  fn test_study_session_serde_field_names() {
    let session = OpenSession::begin("dz:animals-basic", 3).finish(1, 1);
    let json = serde_json::to_string(&session).unwrap();
    assert!(json.contains("\"deckId\""));
    assert!(json.contains("\"startTime\""));
    assert!(json.contains("\"endTime\""));
    assert!(json.contains("\"timeSpentMs\""));
    assert!(json.contains("\"totalCards\""));
    assert!(json.contains("\"masteredCards\""));
    assert!(json.contains("\"learningCards\""));
  }

  #[test]
  fn test_study_session_serde_roundtrip() {
    let session = OpenSession::begin("qu:colors-basic", 5).finish(2, 2);
    let json = serde_json::to_string(&session).unwrap();
    let parsed: StudySession = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, session);
  }
}
