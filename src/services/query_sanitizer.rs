//! Query sanitization for GitHub code search.
//!
//! GitHub code search does not interpret most punctuation, so it is stripped
//! before the query is built. The pipeline is: sanitize → truncate → join
//! words with `+` → embed in the search URL.

use crate::types::search::PreparedQuery;

/// Characters the code search syntax does not accept.
pub const FORBIDDEN_CHARS: &[char] = &[
    '.', ',', ':', ';', '/', '\\', '`', '\'', '"', '=', '*', '!', '?', '#', '$', '&', '+', '^',
    '|', '~', '<', '>', '(', ')', '{', '}', '[', ']', '@',
];

/// Upper bound on the sanitized text, applied before joining.
pub const MAX_QUERY_LENGTH: usize = 256;

/// Base of every constructed search URL.
pub const SEARCH_ENDPOINT: &str = "https://github.com/search";

/// Returns true if `c` is stripped by [`sanitize`].
pub fn is_forbidden(c: char) -> bool {
    FORBIDDEN_CHARS.contains(&c)
}

/// Trims whitespace and byte order marks from both ends.
///
/// `str::trim` leaves U+FEFF in place; pasted text often starts with one.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Replaces every forbidden character with a space, collapses runs of spaces
/// into one and trims surrounding whitespace.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        let c = if is_forbidden(c) { ' ' } else { c };
        if c == ' ' && out.ends_with(' ') {
            continue;
        }
        out.push(c);
    }
    trim_input(&out).to_string()
}

/// Keeps at most `max_length` characters of `s`.
///
/// May cut a word in half; callers apply it to sanitized text only.
pub fn truncate(s: &str, max_length: usize) -> String {
    match s.char_indices().nth(max_length) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}

/// Joins space-separated words with `+`.
pub fn build_query_string(sanitized: &str) -> String {
    sanitized.split(' ').collect::<Vec<_>>().join("+")
}

/// Embeds a built query in the code search URL. No percent-encoding is applied.
pub fn build_search_url(query: &str) -> String {
    format!("{}?q={}&type=code", SEARCH_ENDPOINT, query)
}

/// Runs the whole pipeline with a configurable length bound.
#[derive(Debug, Clone, Copy)]
pub struct QuerySanitizer {
    max_query_length: usize,
}

impl QuerySanitizer {
    /// A bound of 0 is clamped to 1 so a non-empty input never yields an empty query.
    pub fn new(max_query_length: usize) -> Self {
        Self {
            max_query_length: max_query_length.max(1),
        }
    }

    pub fn max_query_length(&self) -> usize {
        self.max_query_length
    }

    /// Turns raw input into a ready-to-send query.
    ///
    /// Returns `None` when nothing survives sanitization; that is a silent
    /// no-op for the caller, not an error.
    pub fn prepare(&self, raw: &str) -> Option<PreparedQuery> {
        let original_query = trim_input(raw).to_string();
        let sanitized = sanitize(&original_query);
        if sanitized.is_empty() {
            return None;
        }

        let query = build_query_string(&truncate(&sanitized, self.max_query_length));
        let url = build_search_url(&query);
        Some(PreparedQuery {
            original_query,
            query,
            url,
        })
    }
}

impl Default for QuerySanitizer {
    fn default() -> Self {
        Self::new(MAX_QUERY_LENGTH)
    }
}
