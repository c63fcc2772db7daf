//! Ray marching through the raw frame
//!
//! A ray is described by its radius-scaled integer projections
//! `cos = round(cos(angle) * r)` and `sin = round(sin(angle) * r)`. One of the
//! two axes is chosen as the independent variable:
//!
//! - `|cos| > r / 2`: x is independent, `y = round(x * sin / cos)`
//! - otherwise: y is independent, `x = round(y * cos / sin)`
//!
//! Choosing the dominant axis keeps the derived ratio bounded near 90° and 270°.
//! The march itself is the same for both axes and only differs in how the
//! (independent, derived) pair is mapped back to (x, y).

use crate::error::{RaycastError, Result};
use crate::raster::RawFrame;
use crate::types::CellState;

/// Independent axis of a ray march.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayAxis {
    X,
    Y,
}

impl RayAxis {
    /// Map an (independent, derived) offset pair to (dx, dy).
    #[inline(always)]
    fn to_xy(self, independent: i32, derived: i32) -> (i32, i32) {
        match self {
            RayAxis::X => (independent, derived),
            RayAxis::Y => (derived, independent),
        }
    }
}

/// First blocking cell found by a march.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub x: i32,
    pub y: i32,
    /// Steps taken along the independent axis.
    pub steps: i32,
    /// Step-space distance `sqrt(steps^2 + round(steps * ratio)^2)`.
    pub distance: f64,
}

/// A single ray ready to march.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    angle: f64,
    axis: RayAxis,
    span: i32,
    sign: i32,
    ratio: f64,
}

impl Ray {
    /// Build the ray for `angle` bounded by `view_radius`.
    ///
    /// Fails with [`RaycastError::DegenerateRayAngle`] when both projections
    /// round to zero. A zero independent projection is treated as a fully
    /// axis-aligned ray (ratio 0).
    pub fn cast(angle: f64, view_radius: i32) -> Result<Self> {
        let r = view_radius as f64;
        let cos = (angle.cos() * r).round() as i32;
        let sin = (angle.sin() * r).round() as i32;
        if (cos == 0 && sin == 0) || !angle.is_finite() {
            return Err(RaycastError::DegenerateRayAngle { angle });
        }

        let axis = if cos.abs() as f64 > r / 2.0 {
            RayAxis::X
        } else {
            RayAxis::Y
        };
        let (independent, dependent) = match axis {
            RayAxis::X => (cos, sin),
            RayAxis::Y => (sin, cos),
        };
        let ratio = if independent == 0 {
            0.0
        } else {
            dependent as f64 / independent as f64
        };

        Ok(Self {
            angle,
            axis,
            span: independent.abs(),
            sign: independent.signum(),
            ratio,
        })
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn axis(&self) -> RayAxis {
        self.axis
    }

    /// Number of steps past the origin the march may take.
    pub fn span(&self) -> i32 {
        self.span
    }

    /// Derived/independent projection ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// March from `origin`, marking empty cells as visited.
    ///
    /// Stops at the first cell that is neither empty, visited nor the player
    /// marker; that cell is marked as hit. Leaving the raw frame or exhausting
    /// the span yields `None`.
    pub fn march(&self, origin: (i32, i32), raw: &mut RawFrame) -> Option<RayHit> {
        let (ox, oy) = origin;
        for i in 0..=self.span {
            let offset = i * self.sign;
            let derived = (offset as f64 * self.ratio).round() as i32;
            let (dx, dy) = self.axis.to_xy(offset, derived);
            let (x, y) = (ox + dx, oy + dy);

            match raw.get(x, y)? {
                CellState::Empty => {
                    raw.set(x, y, CellState::Visited);
                }
                state if state.is_transparent() => {}
                _ => {
                    raw.set(x, y, CellState::Hit);
                    let along = (i as f64 * self.ratio).round();
                    return Some(RayHit {
                        x,
                        y,
                        steps: i,
                        distance: (i as f64).hypot(along),
                    });
                }
            }
        }
        None
    }
}
