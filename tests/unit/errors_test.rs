use std::error::Error;
use std::io;

use codex_search::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_invalid_key_display() {
    let err = StoreError::InvalidKey("a/b".to_string());
    assert_eq!(err.to_string(), "Invalid store key: a/b");
}

#[test]
fn store_error_from_io() {
    let err: StoreError = io::Error::new(io::ErrorKind::Other, "disk full").into();
    assert_eq!(err.to_string(), "Store I/O error: disk full");
    assert!(err.source().is_some());
}

// === HistoryError Tests ===

#[test]
fn history_error_wraps_store_error() {
    let err: HistoryError = StoreError::InvalidKey("k".to_string()).into();
    assert_eq!(err.to_string(), "History store error: Invalid store key: k");
    assert!(matches!(err, HistoryError::Store(StoreError::InvalidKey(_))));
}

#[test]
fn history_error_from_serde() {
    let serde_err = serde_json::from_str::<Vec<i64>>("nope").unwrap_err();
    let err: HistoryError = serde_err.into();
    assert!(err.to_string().starts_with("History serialization error: "));
}

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let err = TabError::NotFound("tab-123".to_string());
    assert_eq!(err.to_string(), "Tab not found: tab-123");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("x.y".to_string()).to_string(),
        "Invalid settings key: x.y"
    );
    assert_eq!(
        SettingsError::InvalidValue("bad".to_string()).to_string(),
        "Invalid settings value: bad"
    );
}

// === AppError Tests ===

#[test]
fn app_error_is_transparent() {
    let err: AppError = TabError::NotFound("t".to_string()).into();
    assert_eq!(err.to_string(), "Tab not found: t");

    let err: AppError = HistoryError::from(StoreError::InvalidKey("k".to_string())).into();
    assert_eq!(err.to_string(), "History store error: Invalid store key: k");
}

#[test]
fn errors_are_boxable() {
    let err: Box<dyn Error> = Box::new(AppError::from(SettingsError::InvalidKey("k".into())));
    assert_eq!(err.to_string(), "Invalid settings key: k");
}
