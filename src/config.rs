//! Application configuration.
//!
//! Small layered lookup for the storage path and active user: config.toml
//! over .env over built-in defaults.

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    storage: Option<StorageConfig>,
    user: Option<UserConfig>,
}

#[derive(Debug, Deserialize)]
struct StorageConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserConfig {
    id: Option<String>,
}

fn read_config_file() -> Option<AppConfig> {
    let contents = std::fs::read_to_string("config.toml").ok()?;
    toml::from_str(&contents).ok()
}

/// Load the storage database path with priority: config.toml > .env > default
pub fn load_storage_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    if let Some(config) = read_config_file() {
        if let Some(path) = config.storage.and_then(|s| s.path) {
            tracing::info!("Using storage path from config.toml: {}", path);
            return PathBuf::from(path);
        }
    }

    if let Ok(path) = std::env::var("PROGRESS_DB_PATH") {
        tracing::info!("Using storage path from PROGRESS_DB_PATH env: {}", path);
        return PathBuf::from(path);
    }

    let default = PathBuf::from("data/progress.db");
    tracing::info!("Using default storage path: {}", default.display());
    default
}

/// Load the active user id with the same priority chain.
///
/// The user id only namespaces the storage key; it carries no
/// authentication semantics.
pub fn load_user_id() -> String {
    let _ = dotenvy::dotenv();

    if let Some(config) = read_config_file() {
        if let Some(id) = config.user.and_then(|u| u.id) {
            return id;
        }
    }

    if let Ok(id) = std::env::var("PROGRESS_USER") {
        return id;
    }

    "default".to_string()
}
