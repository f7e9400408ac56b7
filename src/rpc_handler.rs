//! RPC method handler for the codex-search JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested. `handle_method`
//! translates UI events into calls on the [`App`].

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::ui::markup;

/// Reads a history entry id from `params.time`.
///
/// The page hands ids over as attribute strings, so both `1700000000000` and
/// `"1700000000000"` are accepted.
pub fn parse_time_param(params: &Value) -> Result<i64, String> {
    match params.get("time") {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| format!("invalid time: {}", n)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid time: {}", s)),
        Some(other) => Err(format!("invalid time: {}", other)),
        None => Err("missing time".to_string()),
    }
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    tracing::debug!(method, "rpc call");
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Search ───
        "search.submit" => {
            let query = params.get("query").and_then(|v| v.as_str()).ok_or("missing query")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.search(query).map_err(|e| e.to_string())? {
                Some(outcome) => Ok(json!({
                    "searched": true,
                    "html": markup::history_item(&outcome.record),
                    "record": outcome.record,
                    "tab_id": outcome.tab_id,
                })),
                None => Ok(json!({"searched": false})),
            }
        }
        "search.prepare" => {
            let query = params.get("query").and_then(|v| v.as_str()).ok_or("missing query")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            match a.prepare(query) {
                Some(prepared) => Ok(json!({"query": prepared.query, "url": prepared.url})),
                None => Ok(Value::Null),
            }
        }

        // ─── History ───
        "history.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.records()).map_err(|e| e.to_string())
        }
        "history.render" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"html": a.render_history()}))
        }
        "history.delete" => {
            let time = parse_time_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a.delete_entry(time).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "removed": removed}))
        }
        "history.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.clear_history().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Tabs ───
        "tabs.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let active = a.tab_manager.get_active_tab().map(|t| t.id.clone());
            let arr: Vec<Value> = a
                .tab_manager
                .get_all_tabs()
                .iter()
                .map(|t| json!({
                    "id": t.id, "url": t.url, "title": t.title, "opened_at": t.opened_at,
                    "active": active.as_deref() == Some(t.id.as_str()),
                }))
                .collect();
            Ok(json!(arr))
        }

        "tabs.close" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.tab_manager.close_tab(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "open": a.tab_manager.tab_count()}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
