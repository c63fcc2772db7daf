//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::CameraAction`]s plus the two
//! app-level commands the camera does not know about (quit, view toggle).

pub mod map;

pub use tui_raycast_types as types;

pub use map::{handle_key_event, is_view_toggle, should_quit};
