//! SQLite database layer.
//!
//! Provides connection management and schema migrations for the
//! `sqlite` storage backend.
//!
//! # Usage
//!
//! ```no_run
//! use codex_search::database::Database;
//!
//! let db = Database::open("data/codex-search.db").expect("failed to open database");
//! let conn = db.connection();
//! # let _ = conn;
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
