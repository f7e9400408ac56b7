use serde::{Deserialize, Serialize};

/// One completed search, as persisted in the history.
///
/// `time` is the creation instant in milliseconds since the epoch and doubles
/// as the record's identity: the rendered list item uses it as its element id
/// and deletion is keyed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub original_query: String,
    pub time: i64,
    pub query: String,
    pub url: String,
}

impl SearchRecord {
    /// Stamps a prepared query with its creation time.
    pub fn from_prepared(prepared: PreparedQuery, time: i64) -> Self {
        Self {
            original_query: prepared.original_query,
            time,
            query: prepared.query,
            url: prepared.url,
        }
    }
}

/// Output of the query pipeline before it is stamped with a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedQuery {
    /// Raw input, trimmed.
    pub original_query: String,
    /// Sanitized, truncated and `+`-joined.
    pub query: String,
    pub url: String,
}
