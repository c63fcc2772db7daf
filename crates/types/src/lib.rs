//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the raycaster.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core projection, engine loop, terminal rendering).
//!
//! # Angles
//!
//! All angles are radians. Rotation is unbounded and wraps implicitly through
//! the trigonometric functions.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ANGLE_STEP` | π/288 | Angular step between first-person rays |
//! | `TOP_DOWN_ANGLE_STEP` | π/144 | Angular step of the top-down FOV sweep |
//! | `ROTATE_STEP` | π/36 (5°) | Rotation per rotate action |
//! | `FOV_STEP` | π/18 (10°) | FOV change per narrow/widen action |
//! | `DEFAULT_FOV` | π/2 (90°) | FOV after a reset |
//! | `MOVE_CORRECTION` | 5π/3 | Offset between heading and the translation step formulas |
//!
//! # Distances
//!
//! Distances are raw-frame cell units.
//!
//! - `DEFAULT_VIEW_RADIUS`: 500 - ray march bound after a reset
//! - `RADIUS_STEP`: 10 - radius change per shrink/grow action
//! - `MOVE_SCALE`: 1.2 - translation step scale (rounds to -1, 0 or 1 per axis)
//! - `APPARENT_SIZE`: 10.0 - apparent wall size at unit distance
//!
//! # Examples
//!
//! ```
//! use tui_raycast_types::{CameraAction, CellState, Tile};
//!
//! assert_eq!(Tile::from_code(1), Some(Tile::Wall));
//! assert_eq!(CellState::from(Tile::Wall).symbol(), '▮');
//!
//! let action = CameraAction::from_str("strafeLeft").unwrap();
//! assert_eq!(action, CameraAction::StrafeLeft);
//! assert!(action.is_translation());
//! ```

use std::f64::consts::PI;

/// Angular step between first-person rays (π/288).
pub const ANGLE_STEP: f64 = PI / 288.0;

/// Angular step of the top-down field-of-view sweep (π/144).
pub const TOP_DOWN_ANGLE_STEP: f64 = PI / 144.0;

/// Rotation applied by one rotate action (5°).
pub const ROTATE_STEP: f64 = PI / 36.0;

/// FOV change applied by one narrow/widen action (10°).
pub const FOV_STEP: f64 = PI / 18.0;

/// FOV restored by the reset action (90°).
pub const DEFAULT_FOV: f64 = PI / 2.0;

/// View radius restored by the reset action.
pub const DEFAULT_VIEW_RADIUS: i32 = 500;

/// View radius change applied by one shrink/grow action.
pub const RADIUS_STEP: i32 = 10;

/// Scale of the translation step vector.
///
/// Chosen so each axis rounds to a small integer (-1, 0 or 1) while still allowing
/// diagonal steps.
pub const MOVE_SCALE: f64 = 1.2;

/// Offset subtracted from the heading before computing the translation step.
pub const MOVE_CORRECTION: f64 = 2.5 * PI / 1.5;

/// Apparent wall size at unit distance (`height = APPARENT_SIZE / distance * wall_height`).
pub const APPARENT_SIZE: f64 = 10.0;

/// Default camera resolution in terminal columns.
pub const DEFAULT_CAMERA_WIDTH: u16 = 160;

/// Default camera resolution in terminal rows.
pub const DEFAULT_CAMERA_HEIGHT: u16 = 40;

/// Default render loop rate.
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Minimap keeps every Nth raw-frame row and column.
pub const MINIMAP_STRIDE: usize = 4;

/// Shading ramp, nearest/solid first.
pub const SHADE_RAMP: [char; 8] = ['█', '▓', '▒', '░', '+', ':', '-', '.'];

/// Lower bounds (exclusive) of `height / wall_height` for the first seven ramp levels.
///
/// Anything at or below the last threshold uses the final ramp level.
pub const SHADE_THRESHOLDS: [f64; 7] = [0.9, 0.7, 0.5, 0.4, 0.3, 0.2, 0.1];

/// Symbol used for empty cells in every frame.
pub const EMPTY_SYMBOL: char = ' ';


/// Tile codes of the input map.
///
/// - **Empty** (0): open floor
/// - **Wall** (1): solid, blocks movement and rays
/// - **Player** (2): open floor marking the spawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
    Player,
}

impl Tile {
    /// Decode a map tile code.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycast_types::Tile;
    ///
    /// assert_eq!(Tile::from_code(0), Some(Tile::Empty));
    /// assert_eq!(Tile::from_code(2), Some(Tile::Player));
    /// assert_eq!(Tile::from_code(7), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Tile::Empty),
            1 => Some(Tile::Wall),
            2 => Some(Tile::Player),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Wall => 1,
            Tile::Player => 2,
        }
    }
}

/// State of one raw-frame cell.
///
/// `Visited` and `Hit` are transient markers written by the ray marcher and are
/// discarded when the raw frame is re-synced from the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    PlayerMarker,
    /// A ray passed through this cell and found it empty.
    Visited,
    /// A ray stopped on this wall cell.
    Hit,
}

impl CellState {
    /// Display symbol for text output.
    pub fn symbol(&self) -> char {
        match self {
            CellState::Empty => EMPTY_SYMBOL,
            CellState::Wall => '▮',
            CellState::PlayerMarker => 'C',
            CellState::Visited => '.',
            CellState::Hit => '*',
        }
    }

    /// Whether the camera may not enter this cell.
    pub fn blocks_movement(&self) -> bool {
        matches!(self, CellState::Wall | CellState::Hit)
    }

    /// Whether a ray keeps marching through this cell.
    pub fn is_transparent(&self) -> bool {
        matches!(
            self,
            CellState::Empty | CellState::Visited | CellState::PlayerMarker
        )
    }
}

impl From<Tile> for CellState {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Empty => CellState::Empty,
            Tile::Wall => CellState::Wall,
            Tile::Player => CellState::PlayerMarker,
        }
    }
}

/// Camera actions consumed once per tick.
///
/// These actions are produced by keyboard mapping (or any other driver); the
/// camera never sees raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    /// Turn left by one rotate step
    RotateLeft,
    /// Turn right by one rotate step
    RotateRight,
    /// Shrink the field of view by one FOV step
    NarrowFov,
    /// Grow the field of view by one FOV step
    WidenFov,
    /// Restore the configured default FOV
    ResetFov,
    /// Shrink the view radius by one radius step
    ShrinkRadius,
    /// Grow the view radius by one radius step
    GrowRadius,
    /// Restore the configured default view radius
    ResetRadius,
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
}

impl CameraAction {
    /// Parse action from its camelCase name (case-insensitive).
    ///
    /// Unknown names yield `None`, which callers treat as a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycast_types::CameraAction;
    ///
    /// assert_eq!(CameraAction::from_str("rotateLeft"), Some(CameraAction::RotateLeft));
    /// assert_eq!(CameraAction::from_str("RESETFOV"), Some(CameraAction::ResetFov));
    /// assert_eq!(CameraAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotateleft" => Some(CameraAction::RotateLeft),
            "rotateright" => Some(CameraAction::RotateRight),
            "narrowfov" => Some(CameraAction::NarrowFov),
            "widenfov" => Some(CameraAction::WidenFov),
            "resetfov" => Some(CameraAction::ResetFov),
            "shrinkradius" => Some(CameraAction::ShrinkRadius),
            "growradius" => Some(CameraAction::GrowRadius),
            "resetradius" => Some(CameraAction::ResetRadius),
            "moveforward" => Some(CameraAction::MoveForward),
            "moveback" => Some(CameraAction::MoveBack),
            "strafeleft" => Some(CameraAction::StrafeLeft),
            "straferight" => Some(CameraAction::StrafeRight),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraAction::RotateLeft => "rotateLeft",
            CameraAction::RotateRight => "rotateRight",
            CameraAction::NarrowFov => "narrowFov",
            CameraAction::WidenFov => "widenFov",
            CameraAction::ResetFov => "resetFov",
            CameraAction::ShrinkRadius => "shrinkRadius",
            CameraAction::GrowRadius => "growRadius",
            CameraAction::ResetRadius => "resetRadius",
            CameraAction::MoveForward => "moveForward",
            CameraAction::MoveBack => "moveBack",
            CameraAction::StrafeLeft => "strafeLeft",
            CameraAction::StrafeRight => "strafeRight",
        }
    }

    /// Whether this action translates the camera (and is subject to collision).
    pub fn is_translation(&self) -> bool {
        matches!(
            self,
            CameraAction::MoveForward
                | CameraAction::MoveBack
                | CameraAction::StrafeLeft
                | CameraAction::StrafeRight
        )
    }
}
