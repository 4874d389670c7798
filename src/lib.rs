//! TUI Lagoon (workspace facade crate).
//!
//! Re-exports the effect crates under `crates/` as
//! `tui_lagoon::{core,engine,input,term,types}` and hosts the pieces shared
//! by the binary and the integration tests: argument parsing and the
//! settings file.

pub mod cli;
pub mod config;

pub use tui_lagoon_core as core;
pub use tui_lagoon_engine as engine;
pub use tui_lagoon_input as input;
pub use tui_lagoon_term as term;
pub use tui_lagoon_types as types;
