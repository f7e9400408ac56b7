//! Tests for the App facade: search flow, display coordination and backends.

use std::cell::Cell;
use std::rc::Rc;

use codex_search::app::{open_store, App};
use codex_search::managers::history_store::HistoryStoreTrait;
use codex_search::managers::tab_manager::TabManagerTrait;
use codex_search::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use codex_search::storage::{MemoryStore, Store};
use codex_search::types::errors::{AppError, HistoryError, StoreError};
use codex_search::types::settings::StorageBackend;
use serde_json::json;
use tempfile::TempDir;

fn settings(tmp: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(tmp.path().join("settings.json").to_string_lossy().to_string()))
}

fn memory_app(tmp: &TempDir) -> App {
    App::with_store(Box::new(MemoryStore::new()), settings(tmp))
}

/// Store whose writes fail while `fail` is set.
struct FlakyStore {
    inner: MemoryStore,
    fail: Rc<Cell<bool>>,
}

impl Store for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail.get() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}

fn flaky_app(tmp: &TempDir) -> (App, Rc<Cell<bool>>) {
    let fail = Rc::new(Cell::new(false));
    let store = FlakyStore { inner: MemoryStore::new(), fail: fail.clone() };
    (App::with_store(Box::new(store), settings(tmp)), fail)
}

#[test]
fn test_search_records_and_opens_tab() {
    let tmp = TempDir::new().unwrap();
    let mut app = memory_app(&tmp);

    let outcome = app.search("foo/bar baz!!").unwrap().unwrap();
    assert_eq!(outcome.record.original_query, "foo/bar baz!!");
    assert_eq!(outcome.record.query, "foo+bar+baz");
    assert_eq!(outcome.record.url, "https://github.com/search?q=foo+bar+baz&type=code");

    let tab = app.tab_manager.get_active_tab().unwrap();
    assert_eq!(tab.id, outcome.tab_id);
    assert_eq!(tab.url, outcome.record.url);

    assert_eq!(app.records(), vec![outcome.record.clone()]);
    assert!(app.history_list.contains(outcome.record.time));
    assert!(app
        .render_history()
        .contains(&format!("<li tabindex=0 id={}>", outcome.record.time)));
}

#[test]
fn test_blank_search_does_nothing() {
    let tmp = TempDir::new().unwrap();
    let mut app = memory_app(&tmp);

    assert!(app.search("   ").unwrap().is_none());
    assert!(app.search("()").unwrap().is_none());
    assert_eq!(app.tab_manager.tab_count(), 0);
    assert!(app.records().is_empty());
    assert!(app.history_list.is_empty());
}

#[test]
fn test_rapid_searches_get_distinct_ids() {
    let tmp = TempDir::new().unwrap();
    let mut app = memory_app(&tmp);
    let a = app.search("one").unwrap().unwrap();
    let b = app.search("two").unwrap().unwrap();
    let c = app.search("three").unwrap().unwrap();
    assert!(a.record.time < b.record.time);
    assert!(b.record.time < c.record.time);
}

#[test]
fn test_eviction_is_mirrored_in_display() {
    let tmp = TempDir::new().unwrap();
    let mut app = memory_app(&tmp);
    let mut times = Vec::new();
    for i in 0..16 {
        times.push(app.search(&format!("query {}", i)).unwrap().unwrap().record.time);
    }

    assert_eq!(app.history.len(), 15);
    assert_eq!(app.history_list.ids(), times[1..].to_vec());
    assert!(!app.history_list.contains(times[0]));
}

#[test]
fn test_delete_entry_updates_store_and_display() {
    let tmp = TempDir::new().unwrap();
    let mut app = memory_app(&tmp);
    let a = app.search("alpha").unwrap().unwrap().record;
    let b = app.search("beta").unwrap().unwrap().record;

    assert_eq!(app.delete_entry(a.time).unwrap(), 1);
    assert_eq!(app.records(), vec![b.clone()]);
    assert_eq!(app.history_list.ids(), vec![b.time]);

    assert_eq!(app.delete_entry(a.time).unwrap(), 0);
    assert_eq!(app.records(), vec![b]);
}

#[test]
fn test_failed_delete_leaves_display_untouched() {
    let tmp = TempDir::new().unwrap();
    let (mut app, fail) = flaky_app(&tmp);
    let record = app.search("alpha").unwrap().unwrap().record;

    fail.set(true);
    let result = app.delete_entry(record.time);
    assert!(matches!(
        result,
        Err(AppError::History(HistoryError::Store(StoreError::InvalidKey(_))))
    ));
    assert!(app.history_list.contains(record.time));
}

#[test]
fn test_failed_search_neither_shows_nor_opens() {
    let tmp = TempDir::new().unwrap();
    let (mut app, fail) = flaky_app(&tmp);

    fail.set(true);
    assert!(app.search("alpha").is_err());
    assert!(app.history_list.is_empty());
    assert_eq!(app.tab_manager.tab_count(), 0);
}

#[test]
fn test_clear_history() {
    let tmp = TempDir::new().unwrap();
    let mut app = memory_app(&tmp);
    app.search("alpha").unwrap();
    app.clear_history().unwrap();
    assert!(app.records().is_empty());
    assert_eq!(app.render_history(), "<ul id=\"history-list\"></ul>");
}

#[test]
fn test_settings_size_history_and_queries() {
    let tmp = TempDir::new().unwrap();
    let mut engine = settings(&tmp);
    engine.set_value("history.max_entries", json!(2)).unwrap();
    engine.set_value("search.max_query_length", json!(3)).unwrap();

    let mut app = App::with_store(Box::new(MemoryStore::new()), engine);
    assert_eq!(app.history.capacity(), 2);
    assert_eq!(app.prepare("abcdef").unwrap().query, "abc");

    for q in ["a", "b", "c"] {
        app.search(q).unwrap();
    }
    let queries: Vec<String> = app.records().into_iter().map(|r| r.query).collect();
    assert_eq!(queries, vec!["b", "c"]);
}

#[test]
fn test_zero_query_length_setting_never_searches_empty_query() {
    let tmp = TempDir::new().unwrap();
    let mut engine = settings(&tmp);
    engine.set_value("search.max_query_length", json!(0)).unwrap();

    let mut app = App::with_store(Box::new(MemoryStore::new()), engine);
    let record = app.search("hello world").unwrap().unwrap().record;
    assert_eq!(record.query, "h");
    assert_eq!(record.url, "https://github.com/search?q=h&type=code");
}

#[test]
fn test_search_after_max_timestamp_history() {
    let tmp = TempDir::new().unwrap();
    let raw = r#"[{"originalQuery":"a","time":9223372036854775807,"query":"a","url":"https://github.com/search?q=a&type=code"}]"#;
    let store = MemoryStore::new().with_value("codex_search_history", raw);
    let mut app = App::with_store(Box::new(store), settings(&tmp));

    let record = app.search("next").unwrap().unwrap().record;
    assert_eq!(record.time, i64::MAX);
    assert_eq!(app.delete_entry(i64::MAX).unwrap(), 2);
    assert!(app.history_list.is_empty());
}

#[test]
fn test_history_survives_restart_on_disk_backends() {
    for backend in [StorageBackend::File, StorageBackend::Sqlite] {
        let tmp = TempDir::new().unwrap();
        let data = tmp.path().join("data");
        let record = {
            let mut app = App::with_settings(&data, Some(backend), settings(&tmp)).unwrap();
            app.search("persist me").unwrap().unwrap().record
        };

        let app = App::with_settings(&data, Some(backend), settings(&tmp)).unwrap();
        assert_eq!(app.records(), vec![record.clone()], "{:?}", backend);
        assert!(app.history_list.contains(record.time));
    }
}

#[test]
fn test_memory_backend_forgets() {
    let tmp = TempDir::new().unwrap();
    {
        let mut app = App::with_settings(tmp.path(), Some(StorageBackend::Memory), settings(&tmp)).unwrap();
        app.search("gone").unwrap();
    }
    let app = App::with_settings(tmp.path(), Some(StorageBackend::Memory), settings(&tmp)).unwrap();
    assert!(app.records().is_empty());
}

#[test]
fn test_backend_from_settings() {
    let tmp = TempDir::new().unwrap();
    let mut engine = settings(&tmp);
    engine.set_value("storage.backend", json!("Sqlite")).unwrap();
    let data = tmp.path().join("data");

    let mut app = App::with_settings(&data, None, engine).unwrap();
    app.search("stored in sqlite").unwrap();
    assert!(data.join("codex-search.db").exists());
}

#[test]
fn test_open_store_file_backend_is_lazy() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("never-written");
    let store = open_store(&dir, StorageBackend::File).unwrap();
    assert!(store.get("codex_search_history").unwrap().is_none());
    assert!(!dir.exists());
}
