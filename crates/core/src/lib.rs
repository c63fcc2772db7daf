//! Raycasting core - pure, deterministic, and testable
//!
//! This crate turns a 2D tile map into a first-person character-cell view.
//! It has **zero dependencies** on terminals, timers or input devices:
//!
//! - **Deterministic**: the same map, seed and action sequence yield identical frames
//! - **Testable**: every stage (rasterize, move, march, project) is a plain function
//! - **Portable**: frames are plain character grids
//!
//! # Module Structure
//!
//! - [`grid`]: the low-resolution input map of tile codes
//! - [`raster`]: expands tiles into the raw frame rays march against
//! - [`camera`]: camera state and collision-aware movement with wall sliding
//! - [`ray`]: single-routine ray march with dominant-axis selection
//! - [`projection`]: distance to wall height, shading ramp
//! - [`render`]: first-person and top-down render passes
//! - [`minimap`]: down-sampled diagnostic view
//! - [`rng`]: spawn placement
//!
//! # Pipeline
//!
//! One render tick is:
//!
//! 1. re-sync the raw frame from the grid (drops last tick's ray markers)
//! 2. apply at most one [`CameraAction`](types::CameraAction)
//! 3. march rays and project hits into the output [`Frame`]
//! 4. down-sample the marked raw frame into the minimap
//!
//! # Example
//!
//! ```
//! use tui_raycast_core::{render_first_person, Camera, CameraConfig, Frame, Rasterizer, TileGrid};
//! use tui_raycast_core::types::SHADE_RAMP;
//!
//! let grid = TileGrid::from_codes(&[[1u8, 1, 1], [1, 2, 1], [1, 1, 1]]).unwrap();
//! let rasterizer = Rasterizer::with_cell_size(3, 3);
//! let mut raw = rasterizer.rasterize(&grid);
//!
//! let camera = Camera::new(4, 4, CameraConfig::default());
//! let mut frame = Frame::new(9, 9);
//! let stats = render_first_person(&camera, &mut raw, &mut frame);
//!
//! // A tiny room: every ray hits a wall right away.
//! assert_eq!(stats.hits, stats.rays);
//! assert_eq!(frame.get(4, 4), Some(SHADE_RAMP[0]));
//! ```

pub mod camera;
pub mod error;
pub mod frame;
pub mod grid;
pub mod minimap;
pub mod projection;
pub mod raster;
pub mod ray;
pub mod render;
pub mod rng;

pub use tui_raycast_types as types;

// Re-export commonly used types for convenience
pub use camera::{ActionOutcome, Camera, CameraConfig, MoveOutcome};
pub use error::{RaycastError, Result};
pub use frame::Frame;
pub use grid::TileGrid;
pub use minimap::render_minimap;
pub use projection::{project_height, shade_for, shade_level};
pub use raster::{Rasterizer, RawFrame, ResolutionPolicy};
pub use ray::{Ray, RayAxis, RayHit};
pub use render::{column_span, ray_count, render_first_person, render_top_down, RenderStats};
pub use rng::{spawn_point, SimpleRng};
