use serde::{Deserialize, Serialize};

/// A browsing context a search result was opened in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub opened_at: i64,
}
