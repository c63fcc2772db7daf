//! Tile grid - the low-resolution input map
//!
//! The grid is immutable once built. Uses a flat vector in row-major order.
//! Coordinates: (row, col) where row 0 is the top of the map.

use crate::error::{RaycastError, Result};
use crate::types::Tile;

/// Rectangular map of tiles, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build a grid from rows of tile codes (0 = empty, 1 = wall, 2 = player marker).
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(RaycastError::EmptyMap);
        }

        let mut tiles = Vec::with_capacity(rows.len() * cols);
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != cols {
                return Err(RaycastError::RaggedMap {
                    row,
                    expected: cols,
                    found: codes.len(),
                });
            }
            for (col, &code) in codes.iter().enumerate() {
                let tile =
                    Tile::from_code(code).ok_or(RaycastError::UnknownTileCode { code, row, col })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            tiles,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Get tile at (row, col), `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|i| self.tiles[i])
    }

    /// Iterate rows as tile slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.cols)
    }

    /// Tile codes, one vector per row.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(Tile::code).collect())
            .collect()
    }

    /// First player-marker tile in reading order.
    pub fn player_marker(&self) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&t| t == Tile::Player)
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// Check that every border tile is a wall.
    ///
    /// Movement and ray marching stay inside the map only when this holds; the
    /// first open border tile found (reading order) is reported.
    pub fn validate_enclosed(&self) -> Result<()> {
        for (row, tiles) in self.iter_rows().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                let on_border =
                    row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols;
                if on_border && tile != Tile::Wall {
                    return Err(RaycastError::MapNotEnclosed { row, col });
                }
            }
        }
        Ok(())
    }
}
