//! App core for codex-search.
//!
//! Central struct wiring the history store, its display mirror, the open
//! browsing contexts and the settings engine.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::query_sanitizer::QuerySanitizer;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{FileStore, MemoryStore, SqliteStore, Store};
use crate::types::errors::{AppError, StoreError};
use crate::types::search::{PreparedQuery, SearchRecord};
use crate::types::settings::StorageBackend;
use crate::ui::HistoryList;

/// File name of the SQLite backend inside the data directory.
pub const DATABASE_FILE: &str = "codex-search.db";

/// Result of a search that produced a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub record: SearchRecord,
    /// Browsing context the search URL was opened in.
    pub tab_id: String,
}

/// Central application struct.
pub struct App {
    pub history: HistoryStore<Box<dyn Store>>,
    pub history_list: HistoryList,
    pub tab_manager: TabManager,
    pub settings_engine: SettingsEngine,
    sanitizer: QuerySanitizer,
}

/// Opens the key/value backend for `backend` under `data_dir`.
pub fn open_store(data_dir: &Path, backend: StorageBackend) -> Result<Box<dyn Store>, StoreError> {
    let store: Box<dyn Store> = match backend {
        StorageBackend::Memory => Box::new(MemoryStore::new()),
        StorageBackend::File => Box::new(FileStore::new(data_dir)),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(data_dir.join(DATABASE_FILE))?),
    };
    tracing::debug!(?backend, dir = %data_dir.display(), "opened store");
    Ok(store)
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

impl App {
    /// Creates an App using the settings file at the platform config path.
    ///
    /// `backend` overrides `storage.backend` from the settings.
    pub fn new<P: AsRef<Path>>(data_dir: P, backend: Option<StorageBackend>) -> Result<Self, AppError> {
        Self::with_settings(data_dir, backend, SettingsEngine::load_or_default(None))
    }

    pub fn with_settings<P: AsRef<Path>>(
        data_dir: P,
        backend: Option<StorageBackend>,
        settings_engine: SettingsEngine,
    ) -> Result<Self, AppError> {
        let backend = backend.unwrap_or(settings_engine.get_settings().storage.backend);
        let store = open_store(data_dir.as_ref(), backend)?;
        Ok(Self::with_store(store, settings_engine))
    }

    /// Loads the history from `store`, sized by the current settings.
    pub fn with_store(store: Box<dyn Store>, settings_engine: SettingsEngine) -> Self {
        let settings = settings_engine.get_settings();
        let history = HistoryStore::with_capacity(store, settings.history.max_entries);
        let sanitizer = QuerySanitizer::new(settings.search.max_query_length);
        let history_list = HistoryList::from_records(&history.all());
        tracing::info!(entries = history.len(), capacity = history.capacity(), "app ready");

        Self {
            history,
            history_list,
            tab_manager: TabManager::new(),
            settings_engine,
            sanitizer,
        }
    }

    /// Previews the query pipeline without touching any state.
    pub fn prepare(&self, raw: &str) -> Option<PreparedQuery> {
        self.sanitizer.prepare(raw)
    }

    /// Records a search and opens its URL in a new browsing context.
    ///
    /// Returns `Ok(None)` if nothing survives sanitization. The record is
    /// stored before it is shown or opened; a storage failure does neither.
    pub fn search(&mut self, raw: &str) -> Result<Option<SearchOutcome>, AppError> {
        let Some(prepared) = self.sanitizer.prepare(raw) else {
            tracing::debug!("empty query after sanitization, ignoring");
            return Ok(None);
        };

        let time = self.history.next_timestamp(now_ms());
        let record = self.history.append(SearchRecord::from_prepared(prepared, time))?;

        self.history_list.push(&record);
        if self.history_list.len() > self.history.len() {
            self.history_list.retain_records(&self.history.all());
        }

        let tab_id = self.tab_manager.open_tab(&record.url, true);
        Ok(Some(SearchOutcome { record, tab_id }))
    }

    /// Deletes every entry stamped `time`.
    ///
    /// The display list is only updated once the store accepted the removal.
    pub fn delete_entry(&mut self, time: i64) -> Result<usize, AppError> {
        let removed = self.history.remove_by_timestamp(time)?;
        self.history_list.remove(time);
        Ok(removed)
    }

    pub fn clear_history(&mut self) -> Result<(), AppError> {
        self.history.clear()?;
        self.history_list.clear();
        Ok(())
    }

    pub fn records(&self) -> Vec<SearchRecord> {
        self.history.all()
    }

    /// The whole `<ul id="history-list">` as currently shown.
    pub fn render_history(&self) -> String {
        self.history_list.render()
    }
}
