//! TUI Donut (workspace facade crate).
//!
//! Re-exports the workspace crates under stable module names so the binary,
//! benches and integration tests share one import path, and hosts the
//! environment-driven launch configuration.

pub mod config;

pub use tui_donut_core as core;
pub use tui_donut_engine as engine;
pub use tui_donut_input as input;
pub use tui_donut_term as term;
pub use tui_donut_types as types;
