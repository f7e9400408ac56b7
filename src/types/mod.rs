// codex-search shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod search;
pub mod settings;
pub mod tab;
