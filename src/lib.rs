//! TUI raycaster (workspace facade crate).
//!
//! This package exposes `tui_raycast::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`. The facade itself
//! holds what only the binary needs: argument parsing and map files.

pub use tui_raycast_core as core;
pub use tui_raycast_engine as engine;
pub use tui_raycast_input as input;
pub use tui_raycast_term as term;
pub use tui_raycast_types as types;

pub mod cli;
pub mod map_file;
