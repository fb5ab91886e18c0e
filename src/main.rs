use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deck_progress::storage::SqliteBackend;
use deck_progress::store::{ProgressStore, SavedStore};
use deck_progress::{config, stats, storage};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "deck_progress=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_path = config::load_storage_path();
  let user_id = config::load_user_id();

  let backend = SqliteBackend::open(&db_path).expect("Failed to open progress storage");
  let mut store = ProgressStore::new(Box::new(backend.clone()), storage::storage_key(&user_id));
  store.load().await;

  let mut saved = SavedStore::new(Box::new(backend), storage::saved_key(&user_id));
  saved.load().await;

  let decks = stats::overview(&store);
  if decks.is_empty() && saved.items().is_empty() {
    println!("No progress recorded for user '{}'", user_id);
    return;
  }

  println!("Progress for user '{}'", user_id);
  for deck in decks {
    println!(
      "  {}: {} mastered, {} learning ({} tracked)",
      deck.deck_id, deck.mastered, deck.learning, deck.tracked
    );
    if let Some(session) = store.last_session(&deck.deck_id) {
      for line in stats::last_session_lines(session) {
        println!("    {}", line);
      }
    }
  }

  if !saved.items().is_empty() {
    println!("  {} items saved to profile", saved.items().len());
  }
}
