//! Display-side mirror of the search history.
//!
//! Holds the rendered `<li>` for every entry the page currently shows, keyed
//! by timestamp. Only [`App`](crate::app::App) mutates it, and only after the
//! history store has accepted the matching change.

use super::markup;
use crate::types::search::SearchRecord;

#[derive(Debug, Default, Clone)]
pub struct HistoryList {
    items: Vec<(i64, String)>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list showing `records` in order.
    pub fn from_records(records: &[SearchRecord]) -> Self {
        let mut list = Self::new();
        list.rebuild(records);
        list
    }

    /// Replaces the shown entries with `records`.
    pub fn rebuild(&mut self, records: &[SearchRecord]) {
        self.items = records
            .iter()
            .map(|r| (r.time, markup::history_item(r)))
            .collect();
    }

    /// Appends the element for `record`.
    pub fn push(&mut self, record: &SearchRecord) {
        self.items.push((record.time, markup::history_item(record)));
    }

    /// Removes every element with the given id; returns whether any was shown.
    pub fn remove(&mut self, time: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|(id, _)| *id != time);
        self.items.len() != before
    }

    /// Drops elements whose id is not in `records`, e.g. after an eviction.
    pub fn retain_records(&mut self, records: &[SearchRecord]) {
        self.items
            .retain(|(id, _)| records.iter().any(|r| r.time == *id));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, time: i64) -> bool {
        self.items.iter().any(|(id, _)| *id == time)
    }

    /// Element ids in display order.
    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The whole `<ul id="history-list">` as shown.
    pub fn render(&self) -> String {
        let body = self
            .items
            .iter()
            .map(|(_, html)| html.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        format!("<ul id=\"history-list\">{}</ul>", body)
    }
}
