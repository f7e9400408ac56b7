//! Search history store.
//!
//! Implements `HistoryStoreTrait`: a bounded, oldest-first sequence of
//! [`SearchRecord`]s that is rewritten to a [`Store`] after every mutation.

use crate::storage::Store;
use crate::types::errors::HistoryError;
use crate::types::search::SearchRecord;

/// Key the serialized history is stored under.
pub const HISTORY_KEY: &str = "codex_search_history";

/// Number of searches kept when no capacity is configured.
pub const DEFAULT_MAX_HISTORY_LENGTH: usize = 15;

/// Trait defining search history operations.
pub trait HistoryStoreTrait {
    fn append(&mut self, record: SearchRecord) -> Result<SearchRecord, HistoryError>;
    fn remove_by_timestamp(&mut self, time: i64) -> Result<usize, HistoryError>;
    fn all(&self) -> Vec<SearchRecord>;
    fn clear(&mut self) -> Result<(), HistoryError>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn capacity(&self) -> usize;
}

/// Capacity-bounded history persisted as a JSON array.
pub struct HistoryStore<S: Store> {
    store: S,
    records: Vec<SearchRecord>,
    capacity: usize,
}

impl<S: Store> HistoryStore<S> {
    /// Loads the history from `store` with the default capacity.
    pub fn new(store: S) -> Self {
        Self::with_capacity(store, DEFAULT_MAX_HISTORY_LENGTH)
    }

    /// Loads the history from `store`, keeping at most `capacity` records.
    ///
    /// A missing, unreadable or malformed persisted value yields an empty
    /// history. A persisted history longer than `capacity` is trimmed to its
    /// newest records in memory; storage is rewritten on the next mutation.
    pub fn with_capacity(store: S, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut records = Self::load(&store);
        if records.len() > capacity {
            let excess = records.len() - capacity;
            tracing::debug!(excess, capacity, "trimming persisted history to capacity");
            records.drain(..excess);
        }
        Self {
            store,
            records,
            capacity,
        }
    }

    fn load(store: &S) -> Vec<SearchRecord> {
        let raw = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read search history, starting empty");
                return Vec::new();
            }
        };

        // `null` is what a page that never searched leaves behind.
        match serde_json::from_str::<Option<Vec<SearchRecord>>>(&raw) {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "persisted search history is malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Writes the full sequence under [`HISTORY_KEY`].
    fn persist(&mut self) -> Result<(), HistoryError> {
        let json = serde_json::to_string(&self.records)?;
        self.store.set(HISTORY_KEY, &json)?;
        Ok(())
    }

    /// Returns a timestamp to stamp the next record with.
    ///
    /// The result is `now_ms`, bumped past the newest stored time if the clock
    /// has not advanced, so identities stay unique within the history.
    /// Saturates at `i64::MAX`: past that point new records share the
    /// newest id and are deleted together with it.
    pub fn next_timestamp(&self, now_ms: i64) -> i64 {
        match self.records.last() {
            Some(newest) if newest.time >= now_ms => {
                if newest.time == i64::MAX {
                    tracing::warn!("newest history timestamp is i64::MAX, ids can no longer advance");
                }
                newest.time.saturating_add(1)
            }
            _ => now_ms,
        }
    }

    /// Looks a record up by its timestamp.
    pub fn get(&self, time: i64) -> Option<&SearchRecord> {
        self.records.iter().find(|r| r.time == time)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: Store> HistoryStoreTrait for HistoryStore<S> {
    /// Appends `record`, evicts the oldest record if over capacity, persists,
    /// and returns the stored record.
    fn append(&mut self, record: SearchRecord) -> Result<SearchRecord, HistoryError> {
        self.records.push(record.clone());
        // Each append grows the sequence by one, so one eviction restores the bound.
        if self.records.len() > self.capacity {
            let evicted = self.records.remove(0);
            tracing::debug!(time = evicted.time, "evicted oldest search");
        }
        self.persist()?;
        tracing::info!(time = record.time, query = %record.query, "recorded search");
        Ok(record)
    }

    /// Removes every record with the given timestamp and persists.
    ///
    /// Returns how many records were dropped; an unknown timestamp drops none
    /// and is not an error.
    fn remove_by_timestamp(&mut self, time: i64) -> Result<usize, HistoryError> {
        let before = self.records.len();
        self.records.retain(|r| r.time != time);
        let removed = before - self.records.len();
        self.persist()?;
        tracing::info!(time, removed, "deleted search history entry");
        Ok(removed)
    }

    /// Snapshot of the history, oldest first.
    fn all(&self) -> Vec<SearchRecord> {
        self.records.clone()
    }

    /// Drops every record and removes the persisted value.
    fn clear(&mut self) -> Result<(), HistoryError> {
        self.records.clear();
        self.store.remove(HISTORY_KEY)?;
        tracing::info!("cleared search history");
        Ok(())
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
