// codex-search state managers
// Managers own stateful collections: the search history and open browsing contexts.

pub mod history_store;
pub mod tab_manager;
