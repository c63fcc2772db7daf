//! Terminal presentation module.
//!
//! This is a small rendering layer for terminal play. It avoids widget/layout
//! libraries and instead composes engine frames into a simple framebuffer that
//! is flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Compose frames in a pure step ([`SceneView`]) that tests can inspect
//! - Only send changed cells to the terminal

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tui_raycast_core as core;
pub use tui_raycast_engine as engine;
pub use tui_raycast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{SceneView, Viewport};
