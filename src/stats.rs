//! Aggregates consumed by display surfaces: completion counts per deck and
//! "Last Session" summaries.

use crate::domain::{Deck, MasteryStatus, StudySession};
use crate::store::ProgressStore;

/// Completion summary for one deck definition.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckStats {
    pub deck_id: String,
    pub title: String,
    pub mastered: usize,
    pub total: usize,
}

impl DeckStats {
    /// Fraction for progress bars; 0.0 for an empty deck.
    pub fn fraction(&self) -> f64 {
        if self.total > 0 {
            self.mastered as f64 / self.total as f64
        } else {
            0.0
        }
    }

    /// Display label, e.g. "3 / 3 mastered".
    pub fn mastered_label(&self) -> String {
        format!("{} / {} mastered", self.mastered, self.total)
    }
}

/// Build the completion summary for a deck from the store.
pub fn deck_stats(store: &ProgressStore, deck: &Deck) -> DeckStats {
    DeckStats {
        deck_id: deck.id.clone(),
        title: deck.title.clone(),
        mastered: store.deck_progress(&deck.id, &deck.cards),
        total: deck.cards.len(),
    }
}

/// "Last Session" lines as the stats screen shows them.
pub fn last_session_lines(session: &StudySession) -> Vec<String> {
    // Seconds are rounded, not truncated
    let seconds = (session.time_spent_ms + 500) / 1000;
    vec![
        format!("Date: {}", session.end_time.format("%Y-%m-%d")),
        format!("Time spent: {}s", seconds),
        format!("Mastered: {} cards", session.mastered_cards),
        format!("Learning: {} cards", session.learning_cards),
    ]
}

/// Per-deck summary over tracked entries only, for surfaces that do not
/// hold deck definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckOverview {
    pub deck_id: String,
    pub mastered: usize,
    pub learning: usize,
    pub tracked: usize,
}

/// Overview of every deck present in the envelope, ordered by deck id.
pub fn overview(store: &ProgressStore) -> Vec<DeckOverview> {
    let mut decks: Vec<DeckOverview> = store
        .envelope()
        .progress
        .iter()
        .map(|(deck_id, cards)| DeckOverview {
            deck_id: deck_id.clone(),
            mastered: cards
                .values()
                .filter(|p| p.status == MasteryStatus::Mastered)
                .count(),
            learning: cards
                .values()
                .filter(|p| p.status == MasteryStatus::Learning)
                .count(),
            tracked: cards.len(),
        })
        .collect();

    decks.sort_by(|a, b| a.deck_id.cmp(&b.deck_id));
    decks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{storage_key, MemoryBackend};
    use crate::testing;

    fn memory_store() -> ProgressStore {
        ProgressStore::new(Box::new(MemoryBackend::new()), storage_key("test-user"))
    }

    #[tokio::test]
    async fn test_fully_mastered_deck_label() {
        let mut store = memory_store();
        let deck = testing::deck("dz:animals-basic", &["card1", "card2", "card3"]);

        for card in &deck.cards {
            store.set_mastered(&deck.id, &card.id, true).await;
        }

        let stats = deck_stats(&store, &deck);
        assert_eq!(stats.mastered, 3);
        assert_eq!(stats.mastered_label(), "3 / 3 mastered");
        assert!((stats.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_untouched_deck_label() {
        let store = memory_store();
        let deck = testing::deck("dz:animals-basic", &["card1", "card2", "card3"]);

        let stats = deck_stats(&store, &deck);
        assert_eq!(stats.mastered_label(), "0 / 3 mastered");
        assert_eq!(stats.fraction(), 0.0);
    }

    #[test]
    fn test_empty_deck_fraction_is_zero() {
        let store = memory_store();
        let deck = testing::deck("dz:empty", &[]);
        assert_eq!(deck_stats(&store, &deck).fraction(), 0.0);
    }

    #[tokio::test]
    async fn test_last_session_lines_format() {
        let mut store = memory_store();
        store.start_session("dz:animals-basic", 3);
        store.set_mastered("dz:animals-basic", "card1", true).await;
        store.set_learning("dz:animals-basic", "card2", true).await;
        store.end_session().await;

        let session = store.last_session("dz:animals-basic").unwrap();
        let lines = last_session_lines(session);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Date: "));
        assert!(lines[1].starts_with("Time spent: "));
        assert!(lines[1].ends_with('s'));
        assert_eq!(lines[2], "Mastered: 1 cards");
        assert_eq!(lines[3], "Learning: 1 cards");
    }

    #[test]
    fn test_time_spent_is_rounded_to_seconds() {
        let mut session = crate::domain::OpenSession::begin("dz:animals-basic", 3).finish(0, 0);

        session.time_spent_ms = 1500;
        assert_eq!(last_session_lines(&session)[1], "Time spent: 2s");

        session.time_spent_ms = 1499;
        assert_eq!(last_session_lines(&session)[1], "Time spent: 1s");
    }

    #[tokio::test]
    async fn test_overview_orders_decks_and_counts_statuses() {
        let mut store = memory_store();
        store.set_mastered("qu:colors-basic", "card1", true).await;
        store.set_mastered("dz:animals-basic", "card1", true).await;
        store.set_learning("dz:animals-basic", "card2", true).await;
        store.set_learning("dz:animals-basic", "card3", true).await;

        let decks = overview(&store);
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[0].deck_id, "dz:animals-basic");
        assert_eq!(decks[0].mastered, 1);
        assert_eq!(decks[0].learning, 2);
        assert_eq!(decks[0].tracked, 3);
        assert_eq!(decks[1].deck_id, "qu:colors-basic");
        assert_eq!(decks[1].tracked, 1);
    }
}
