use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mastery status tracked per card per user.
///
/// Any status is reachable from any other; this is a flag, not a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MasteryStatus {
  #[default]
  New,
  Learning,
  Mastered,
}

impl MasteryStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::New => "new",
      Self::Learning => "learning",
      Self::Mastered => "mastered",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "new" => Some(Self::New),
      "learning" => Some(Self::Learning),
      "mastered" => Some(Self::Mastered),
      _ => None,
    }
  }
}

/// Progress entry for one card, created lazily on first interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProgress {
  pub status: MasteryStatus,
  pub last_updated: DateTime<Utc>,
}

impl Default for CardProgress {
  fn default() -> Self {
    Self {
      status: MasteryStatus::New,
      last_updated: Utc::now(),
    }
  }
}

impl CardProgress {
  /// Move to `status`, refreshing the update timestamp.
  pub fn transition(&mut self, status: MasteryStatus) {
    self.status = status;
    self.last_updated = Utc::now();
  }
}
