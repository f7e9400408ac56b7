use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::Tab;

/// Trait defining the browsing context interface search results are opened in.
pub trait TabManagerTrait {
    fn open_tab(&mut self, url: &str, active: bool) -> String;
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> Vec<&Tab>;
    fn get_active_tab(&self) -> Option<&Tab>;
    fn tab_count(&self) -> usize;
}

/// Open tabs kept before the oldest background tab is dropped.
pub const DEFAULT_MAX_TABS: usize = 50;

/// In-memory set of open browsing contexts.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
    max_tabs: usize,
}

impl TabManager {
    pub fn new() -> Self {
        Self::with_max_tabs(DEFAULT_MAX_TABS)
    }

    /// Keeps at most `max_tabs` tabs (at least 1).
    pub fn with_max_tabs(max_tabs: usize) -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            max_tabs: max_tabs.max(1),
        }
    }

    pub fn max_tabs(&self) -> usize {
        self.max_tabs
    }

    /// Drops the oldest tabs other than `keep` and the active one until the
    /// limit holds again.
    fn enforce_limit(&mut self, keep: &str) {
        while self.tabs.len() > self.max_tabs {
            let active = self.active_tab_id.as_deref();
            let Some(idx) = self
                .tabs
                .iter()
                .position(|t| t.id != keep && Some(t.id.as_str()) != active)
            else {
                break;
            };
            let dropped = self.tabs.remove(idx);
            tracing::debug!(tab_id = %dropped.id, "dropped oldest tab");
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Opens `url` in a new tab and returns its ID.
    /// The first tab always becomes active. Past the limit the oldest
    /// background tab is closed.
    fn open_tab(&mut self, url: &str, active: bool) -> String {
        let id = Uuid::new_v4().to_string();
        self.tabs.push(Tab {
            id: id.clone(),
            url: url.to_string(),
            title: url.to_string(),
            opened_at: Self::now(),
        });
        if active || self.active_tab_id.is_none() {
            self.active_tab_id = Some(id.clone());
        }
        tracing::debug!(tab_id = %id, url, "opened tab");
        self.enforce_limit(&id);
        id
    }

    /// Closes a tab. If it was active, the tab now at its position (or the
    /// last one) becomes active.
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.tabs.remove(idx);
        tracing::debug!(tab_id, "closed tab");

        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = self
                .tabs
                .get(idx)
                .or_else(|| self.tabs.last())
                .map(|t| t.id.clone());
        }
        Ok(())
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().collect()
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_deref()
            .and_then(|id| self.get_tab(id))
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
