//! Session tracking: bounds a study screen's active time and summarizes
//! the outcome when it closes.

use crate::domain::{MasteryStatus, OpenSession, StudySession};

use super::ProgressStore;

impl ProgressStore {
  /// Open a study session for `deck_id`.
  ///
  /// A session left open by an abnormal prior termination is silently
  /// replaced; sessions are best-effort telemetry, not a durability
  /// guarantee.
  pub fn start_session(&mut self, deck_id: &str, total_cards: usize) {
    if let Some(stale) = self.open_session.take() {
      tracing::debug!("Replacing open session for deck {}", stale.deck_id);
    }
    self.open_session = Some(OpenSession::begin(deck_id, total_cards));
  }

  /// Close the open session, snapshot the deck's mastered/learning counts,
  /// append the summary to the session log, and persist.
  ///
  /// No-op when no session is open. Screens call this from both explicit
  /// navigation and unmount cleanup, so a second call must be harmless.
  pub async fn end_session(&mut self) {
    let Some(open) = self.open_session.take() else {
      return;
    };

    let mastered = self.count_by_status(&open.deck_id, MasteryStatus::Mastered);
    let learning = self.count_by_status(&open.deck_id, MasteryStatus::Learning);
    let session = open.finish(mastered, learning);

    tracing::info!(
      "Study session ended: deck={} time={}ms mastered={} learning={}",
      session.deck_id,
      session.time_spent_ms,
      session.mastered_cards,
      session.learning_cards
    );

    self.envelope.sessions.push(session);
    self.persist().await;
  }

  pub fn has_open_session(&self) -> bool {
    self.open_session.is_some()
  }

  /// Sessions for a deck in insertion order (most recent last).
  pub fn sessions_by_deck(&self, deck_id: &str) -> Vec<&StudySession> {
    self
      .envelope
      .sessions
      .iter()
      .filter(|session| session.deck_id == deck_id)
      .collect()
  }

  /// The most recent session for a deck, for the "Last Session" display.
  pub fn last_session(&self, deck_id: &str) -> Option<&StudySession> {
    self
      .envelope
      .sessions
      .iter()
      .rev()
      .find(|session| session.deck_id == deck_id)
  }
}
