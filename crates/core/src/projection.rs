//! Distance to wall height projection and distance shading.

use crate::types::{APPARENT_SIZE, SHADE_RAMP, SHADE_THRESHOLDS};

/// Apparent wall height for a hit at `distance`, clamped to `wall_height`.
///
/// A zero distance (ray origin on a wall) yields the full `wall_height`.
pub fn project_height(distance: f64, wall_height: usize) -> usize {
    if distance <= 0.0 {
        return wall_height;
    }
    let height = (APPARENT_SIZE / distance * wall_height as f64).round();
    (height as usize).min(wall_height)
}

/// Ramp level (0 = nearest) for a projected height.
pub fn shade_level(height: usize, wall_height: usize) -> usize {
    if wall_height == 0 {
        return SHADE_RAMP.len() - 1;
    }
    let ratio = height as f64 / wall_height as f64;
    SHADE_THRESHOLDS
        .iter()
        .position(|&threshold| ratio > threshold)
        .unwrap_or(SHADE_RAMP.len() - 1)
}

/// Shading character for a projected height.
pub fn shade_for(height: usize, wall_height: usize) -> char {
    SHADE_RAMP[shade_level(height, wall_height)]
}

/// Top row of a vertically centred strip of `height` rows.
pub fn strip_top(height: usize, wall_height: usize) -> usize {
    (wall_height.saturating_sub(height) as f64 / 2.0).round() as usize
}
