pub mod deck;
pub mod progress;
pub mod saved;
pub mod session;

pub use deck::{Card, Deck, LanguageCode};
pub use progress::{CardProgress, MasteryStatus};
pub use saved::{SavedDraft, SavedItem, SavedSource};
pub use session::{OpenSession, StudySession};
