//! Camera state and collision-aware movement
//!
//! The camera stands on a raw-frame cell and carries the heading, field of view
//! and view radius used by the ray marcher. Every translation is checked against
//! the raw frame, so the camera never ends up on a blocking cell.
//!
//! # Sliding
//!
//! A translation step `(dx, dy)` is tried in priority order:
//!
//! 1. diagonal `(x + dx, y + dy)`
//! 2. horizontal only `(x + dx, y)`
//! 3. vertical only `(x, y + dy)`
//!
//! The first walkable target wins; if none is walkable the camera stays put.

use tracing::{debug, warn};

use crate::raster::RawFrame;
use crate::types::{
    CameraAction, DEFAULT_FOV, DEFAULT_VIEW_RADIUS, FOV_STEP, MOVE_CORRECTION, MOVE_SCALE,
    RADIUS_STEP, ROTATE_STEP,
};

/// Tunables for camera controls. Reset actions restore the defaults held here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub default_fov: f64,
    pub default_view_radius: i32,
    pub rotate_step: f64,
    pub fov_step: f64,
    pub radius_step: i32,
    pub move_scale: f64,
    pub move_correction: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_fov: DEFAULT_FOV,
            default_view_radius: DEFAULT_VIEW_RADIUS,
            rotate_step: ROTATE_STEP,
            fov_step: FOV_STEP,
            radius_step: RADIUS_STEP,
            move_scale: MOVE_SCALE,
            move_correction: MOVE_CORRECTION,
        }
    }
}

/// Which target a translation ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Diagonal,
    Horizontal,
    Vertical,
    Blocked,
}

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Rotation, FOV or radius changed.
    Adjusted,
    Moved(MoveOutcome),
}

/// First-person camera on the raw frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    x: i32,
    y: i32,
    rotation: f64,
    fov: f64,
    view_radius: i32,
    config: CameraConfig,
}

impl Camera {
    /// Create a camera at raw-frame cell (x, y) with the config's default FOV and radius.
    pub fn new(x: i32, y: i32, config: CameraConfig) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            fov: config.default_fov,
            view_radius: config.default_view_radius,
            config,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_view_radius(mut self, view_radius: i32) -> Self {
        self.view_radius = view_radius;
        self
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn view_radius(&self) -> i32 {
        self.view_radius
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Base translation step for the current heading.
    ///
    /// Each component is `round(move_scale * trig(rotation - move_correction))`.
    pub fn step_vector(&self) -> (i32, i32) {
        let heading = self.rotation - self.config.move_correction;
        let dx = (self.config.move_scale * heading.cos()).round() as i32;
        let dy = (self.config.move_scale * heading.sin()).round() as i32;
        (dx, dy)
    }

    /// Apply one action. Translations are checked against `raw`.
    pub fn apply(&mut self, action: CameraAction, raw: &RawFrame) -> ActionOutcome {
        let (cos, sin) = self.step_vector();
        match action {
            CameraAction::RotateLeft => self.rotation -= self.config.rotate_step,
            CameraAction::RotateRight => self.rotation += self.config.rotate_step,
            CameraAction::NarrowFov => self.set_fov(self.fov - self.config.fov_step),
            CameraAction::WidenFov => self.set_fov(self.fov + self.config.fov_step),
            CameraAction::ResetFov => self.set_fov(self.config.default_fov),
            CameraAction::ShrinkRadius => {
                self.set_view_radius(self.view_radius - self.config.radius_step)
            }
            CameraAction::GrowRadius => {
                self.set_view_radius(self.view_radius + self.config.radius_step)
            }
            CameraAction::ResetRadius => self.set_view_radius(self.config.default_view_radius),
            CameraAction::MoveForward => return ActionOutcome::Moved(self.translate(cos, sin, raw)),
            CameraAction::MoveBack => return ActionOutcome::Moved(self.translate(-cos, -sin, raw)),
            CameraAction::StrafeLeft => return ActionOutcome::Moved(self.translate(sin, -cos, raw)),
            CameraAction::StrafeRight => {
                return ActionOutcome::Moved(self.translate(-sin, cos, raw))
            }
        }

        debug!(
            action = action.as_str(),
            rotation = self.rotation,
            fov = self.fov,
            view_radius = self.view_radius,
            "camera adjusted"
        );
        ActionOutcome::Adjusted
    }

    /// Translate by (dx, dy) with the sliding collision policy.
    pub fn translate(&mut self, dx: i32, dy: i32, raw: &RawFrame) -> MoveOutcome {
        let candidates = [
            ((dx, dy), MoveOutcome::Diagonal),
            ((dx, 0), MoveOutcome::Horizontal),
            ((0, dy), MoveOutcome::Vertical),
        ];

        let outcome = candidates
            .into_iter()
            .find(|&((cx, cy), _)| raw.is_walkable(self.x + cx, self.y + cy))
            .map(|((cx, cy), outcome)| {
                self.x += cx;
                self.y += cy;
                outcome
            })
            .unwrap_or(MoveOutcome::Blocked);

        debug!(dx, dy, x = self.x, y = self.y, ?outcome, "camera translated");
        outcome
    }

    fn set_fov(&mut self, fov: f64) {
        if fov <= 0.0 {
            warn!(fov, "field of view is degenerate, no rays will be cast");
        }
        self.fov = fov;
    }

    fn set_view_radius(&mut self, view_radius: i32) {
        let view_radius = view_radius.max(0);
        if view_radius == 0 {
            warn!("view radius is zero, every ray is degenerate");
        }
        self.view_radius = view_radius;
    }
}
