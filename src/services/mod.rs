// codex-search services
// Stateless query construction and the settings engine.

pub mod query_sanitizer;
pub mod settings_engine;
