use thiserror::Error;

// === StoreError ===

/// Errors raised by a key/value persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The SQLite backend rejected a statement.
    #[error("Store database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// The key cannot be mapped onto the backend (e.g. a path separator in a file key).
    #[error("Invalid store key: {0}")]
    InvalidKey(String),
}

// === HistoryError ===

/// Errors related to search history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Persisting the history failed.
    #[error("History store error: {0}")]
    Store(#[from] StoreError),
    /// The history could not be serialized.
    #[error("History serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// === TabError ===

/// Errors related to browsing context management.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === AppError ===

/// Errors surfaced by the [`App`](crate::app::App) facade.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Tab(#[from] TabError),
}
