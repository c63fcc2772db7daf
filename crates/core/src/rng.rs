//! RNG module - deterministic spawn placement
//!
//! The camera spawns on the player-marker tile when the map has one. Otherwise
//! a cell is drawn uniformly from the precomputed list of walkable raw-frame
//! cells, so placement always terminates, even on maps that are nearly all wall.
//!
//! Uses a simple LCG so a given seed always yields the same spawn.

use crate::error::{RaycastError, Result};
use crate::grid::TileGrid;
use crate::raster::{Rasterizer, RawFrame};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick a uniformly chosen element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i)
    }
}

/// Choose the camera's starting cell.
///
/// The centre of the player-marker tile's block wins when it is walkable;
/// otherwise a walkable cell is sampled with `seed`.
pub fn spawn_point(
    grid: &TileGrid,
    rasterizer: &Rasterizer,
    raw: &RawFrame,
    seed: u32,
) -> Result<(i32, i32)> {
    if let Some((row, col)) = grid.player_marker() {
        let (x, y) = rasterizer.block_center(row, col);
        if raw.is_walkable(x, y) {
            return Ok((x, y));
        }
    }

    let open = raw.open_cells();
    SimpleRng::new(seed)
        .choose(&open)
        .copied()
        .ok_or(RaycastError::NoOpenCell)
}
