use serde::{Deserialize, Serialize};

use crate::managers::history_store::DEFAULT_MAX_HISTORY_LENGTH;
use crate::services::query_sanitizer::MAX_QUERY_LENGTH;

/// Top-level settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    pub history: HistorySettings,
    pub search: SearchSettings,
    pub storage: StorageSettings,
}

/// History retention settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySettings {
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_HISTORY_LENGTH,
        }
    }
}

/// Query construction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSettings {
    pub max_query_length: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_query_length: MAX_QUERY_LENGTH,
        }
    }
}

/// Where the history is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

/// Persistence backend for the key/value store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Nothing survives the process.
    Memory,
    /// One JSON file per key in the data directory.
    #[default]
    File,
    /// A `kv_store` table in `codex-search.db`.
    Sqlite,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}
