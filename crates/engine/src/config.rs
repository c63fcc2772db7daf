//! Engine configuration.

use crate::core::{CameraConfig, ResolutionPolicy};
use crate::types::{DEFAULT_CAMERA_HEIGHT, DEFAULT_CAMERA_WIDTH, DEFAULT_FRAME_RATE};

/// What the primary frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Shaded first-person projection.
    #[default]
    FirstPerson,
    /// The raw frame with the field of view swept onto it.
    TopDown,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::FirstPerson => RenderMode::TopDown,
            RenderMode::TopDown => RenderMode::FirstPerson,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::FirstPerson => "first-person",
            RenderMode::TopDown => "top-down",
        }
    }
}

/// Construction-time settings for [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Camera resolution in character cells; fixes the output frame size.
    pub width: u16,
    pub height: u16,
    /// Render loop rate; the tick interval is `1000 / frame_rate` ms.
    pub frame_rate: u32,
    pub mode: RenderMode,
    pub resolution: ResolutionPolicy,
    /// Reject maps whose border is not entirely wall.
    pub require_enclosed: bool,
    /// Seed for spawn sampling when the map has no player marker.
    pub seed: u32,
    pub camera: CameraConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CAMERA_WIDTH,
            height: DEFAULT_CAMERA_HEIGHT,
            frame_rate: DEFAULT_FRAME_RATE,
            mode: RenderMode::default(),
            resolution: ResolutionPolicy::default(),
            require_enclosed: true,
            seed: 1,
            camera: CameraConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_resolution(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
}
