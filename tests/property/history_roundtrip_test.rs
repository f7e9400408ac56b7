//! Property-based tests for history persistence round-trip.
//!
//! Whatever the backend, a history written by one store instance is read
//! back unchanged by a fresh one.

use codex_search::managers::history_store::{HistoryStore, HistoryStoreTrait, HISTORY_KEY};
use codex_search::storage::{FileStore, MemoryStore, SqliteStore, Store};
use codex_search::types::search::SearchRecord;
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_record() -> impl Strategy<Value = SearchRecord> {
    ("\\PC{0,40}", any::<i64>(), "[a-z0-9+%_-]{1,30}").prop_map(|(original_query, time, query)| {
        SearchRecord {
            url: format!("https://github.com/search?q={}&type=code", query),
            original_query,
            time,
            query,
        }
    })
}

fn arb_records() -> impl Strategy<Value = Vec<SearchRecord>> {
    prop::collection::vec(arb_record(), 1..15)
}

fn fill<S: Store>(store: S, records: &[SearchRecord]) -> HistoryStore<S> {
    let mut history = HistoryStore::new(store);
    for r in records {
        history.append(r.clone()).unwrap();
    }
    history
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn memory_roundtrip(records in arb_records()) {
        let history = fill(MemoryStore::new(), &records);
        let raw = history.store().get(HISTORY_KEY).unwrap().unwrap();

        let reloaded = HistoryStore::new(MemoryStore::new().with_value(HISTORY_KEY, &raw));
        prop_assert_eq!(reloaded.all(), records);
    }

    #[test]
    fn file_roundtrip(records in arb_records()) {
        let tmp = TempDir::new().unwrap();
        fill(FileStore::new(tmp.path()), &records);

        let reloaded = HistoryStore::new(FileStore::new(tmp.path()));
        prop_assert_eq!(reloaded.all(), records);
    }

    #[test]
    fn sqlite_roundtrip(records in arb_records()) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("history.db");
        fill(SqliteStore::open(&path).unwrap(), &records);

        let reloaded = HistoryStore::new(SqliteStore::open(&path).unwrap());
        prop_assert_eq!(reloaded.all(), records);
    }
}
