//! Presentation layer for the search page.
//!
//! `markup` renders history entries as HTML; `history_list` mirrors which
//! entries the page currently shows so deletions can be applied to both the
//! store and the display.

pub mod history_list;
pub mod markup;

pub use history_list::HistoryList;
