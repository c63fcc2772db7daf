//! Engine crate - the per-tick render pipeline and its timer.
//!
//! [`Engine`] ties the core stages together; [`RenderLoop`] decides when a tick
//! is due. Neither touches the terminal: callers feed actions in and read
//! [`Frame`](core::Frame)s out.
//!
//! # Example
//!
//! ```
//! use tui_raycast_engine::{Engine, EngineConfig};
//! use tui_raycast_engine::core::TileGrid;
//! use tui_raycast_engine::types::CameraAction;
//!
//! let grid = TileGrid::from_codes(&[
//!     [1u8, 1, 1, 1],
//!     [1, 2, 0, 1],
//!     [1, 0, 0, 1],
//!     [1, 1, 1, 1],
//! ])
//! .unwrap();
//! let mut engine = Engine::new(grid, EngineConfig::default().with_resolution(40, 20)).unwrap();
//!
//! engine.tick(Some(CameraAction::RotateRight));
//! let text = engine.frame().to_text();
//! assert_eq!(text.lines().count(), 20);
//! ```

pub mod config;
pub mod engine;
pub mod render_loop;

pub use tui_raycast_core as core;
pub use tui_raycast_types as types;

pub use config::{EngineConfig, RenderMode};
pub use engine::Engine;
pub use render_loop::RenderLoop;
