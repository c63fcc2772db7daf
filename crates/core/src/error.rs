//! Error conditions surfaced by the raycasting core.

use thiserror::Error;

/// Named failure conditions of map validation, rasterization and projection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RaycastError {
    #[error("map has no rows or no columns")]
    EmptyMap,

    #[error("map row {row} has {found} tiles, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile code {code} at row {row}, column {col}")]
    UnknownTileCode { code: u8, row: usize, col: usize },

    #[error("camera resolution must be non-zero")]
    ZeroResolution,

    #[error(
        "map of {map_cols}x{map_rows} tiles does not evenly divide camera resolution {width}x{height}"
    )]
    MapResolutionMismatch {
        map_cols: usize,
        map_rows: usize,
        width: usize,
        height: usize,
    },

    #[error("map is not enclosed by walls: open tile on the border at row {row}, column {col}")]
    MapNotEnclosed { row: usize, col: usize },

    #[error("map has no open cell to place the camera on")]
    NoOpenCell,

    #[error("cell ({x}, {y}) is blocked or outside the raw frame")]
    BlockedCell { x: i32, y: i32 },

    #[error("ray at angle {angle} rad has no non-zero projection")]
    DegenerateRayAngle { angle: f64 },

    #[error("frame rate must be positive, got {0}")]
    InvalidFrameRate(u32),
}

pub type Result<T> = std::result::Result<T, RaycastError>;
