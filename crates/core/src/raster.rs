//! World rasterizer - expands the tile grid into the raw frame
//!
//! Every map tile is replicated into a `cell_w x cell_h` block of raw-frame cells.
//! The raw frame is what the camera collides against and what rays march through.

use crate::error::{RaycastError, Result};
use crate::grid::TileGrid;
use crate::types::{CellState, Tile};

/// How a camera resolution that the map does not evenly divide is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    /// Fail with [`RaycastError::MapResolutionMismatch`].
    #[default]
    Exact,
    /// Use truncated cell sizes; the raw frame may be smaller than the camera.
    Truncate,
}

/// Replication factors derived from map size and camera resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rasterizer {
    cell_w: usize,
    cell_h: usize,
}

impl Rasterizer {
    /// Derive cell sizes for rendering `grid` at `width x height` camera cells.
    pub fn new(grid: &TileGrid, width: usize, height: usize, policy: ResolutionPolicy) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RaycastError::ZeroResolution);
        }

        let mismatch = RaycastError::MapResolutionMismatch {
            map_cols: grid.cols(),
            map_rows: grid.rows(),
            width,
            height,
        };

        let cell_w = width / grid.cols();
        let cell_h = height / grid.rows();
        if cell_w == 0 || cell_h == 0 {
            return Err(mismatch);
        }
        if policy == ResolutionPolicy::Exact
            && (width % grid.cols() != 0 || height % grid.rows() != 0)
        {
            return Err(mismatch);
        }

        Ok(Self { cell_w, cell_h })
    }

    /// Build a rasterizer with explicit cell sizes.
    pub fn with_cell_size(cell_w: usize, cell_h: usize) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn cell_w(&self) -> usize {
        self.cell_w
    }

    pub fn cell_h(&self) -> usize {
        self.cell_h
    }

    /// Rasterize into a new raw frame.
    pub fn rasterize(&self, grid: &TileGrid) -> RawFrame {
        let mut raw = RawFrame::new(0, 0);
        self.rasterize_into(grid, &mut raw);
        raw
    }

    /// Re-sync an existing raw frame from the grid, discarding ray markers.
    ///
    /// Reuses the frame's allocation when the dimensions are unchanged.
    pub fn rasterize_into(&self, grid: &TileGrid, raw: &mut RawFrame) {
        let width = grid.cols() * self.cell_w;
        let height = grid.rows() * self.cell_h;
        raw.resize(width, height);

        for (row, tiles) in grid.iter_rows().enumerate() {
            let y0 = row * self.cell_h;
            let line = &mut raw.cells[y0 * width..(y0 + 1) * width];
            for (col, &tile) in tiles.iter().enumerate() {
                let x0 = col * self.cell_w;
                line[x0..x0 + self.cell_w].fill(CellState::from(tile));
            }
            for dy in 1..self.cell_h {
                let dst = (y0 + dy) * width;
                raw.cells.copy_within(y0 * width..(y0 + 1) * width, dst);
            }
        }
    }

    /// Raw-frame cell at the centre of a map tile's block.
    pub fn block_center(&self, row: usize, col: usize) -> (i32, i32) {
        (
            (col * self.cell_w + self.cell_w / 2) as i32,
            (row * self.cell_h + self.cell_h / 2) as i32,
        )
    }

    /// Read tiles back from a raw frame by sampling the top-left cell of each block.
    ///
    /// Ray markers read back as the tile they overlay (`Visited` as empty, `Hit` as wall).
    pub fn sample_tiles(&self, raw: &RawFrame) -> Vec<Vec<Tile>> {
        (0..raw.height() / self.cell_h)
            .map(|row| {
                (0..raw.width() / self.cell_w)
                    .map(|col| {
                        let x = (col * self.cell_w) as i32;
                        let y = (row * self.cell_h) as i32;
                        match raw.get(x, y).unwrap_or_default() {
                            CellState::Wall | CellState::Hit => Tile::Wall,
                            CellState::PlayerMarker => Tile::Player,
                            CellState::Empty | CellState::Visited => Tile::Empty,
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// The expanded, discretized world, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl RawFrame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.resize(width * height, CellState::Empty);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Cell at (x, y), `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> bool {
        match self.idx(x, y) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Whether the camera may stand on (x, y). Out of bounds is never walkable.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(state) if !state.blocks_movement())
    }

    /// All walkable cells in reading order.
    pub fn open_cells(&self) -> Vec<(i32, i32)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| !state.blocks_movement())
            .map(|(i, _)| ((i % self.width) as i32, (i / self.width) as i32))
            .collect()
    }

    /// Count cells in a given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Render as text, rows joined by newlines.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height * 3);
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(CellState::symbol));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> TileGrid {
        TileGrid::from_codes(&[[1u8, 1, 1], [1, 2, 1], [1, 1, 1]]).unwrap()
    }

    #[test]
    fn exact_policy_requires_even_division() {
        let grid = room();
        let r = Rasterizer::new(&grid, 9, 6, ResolutionPolicy::Exact).unwrap();
        assert_eq!((r.cell_w(), r.cell_h()), (3, 2));

        assert!(matches!(
            Rasterizer::new(&grid, 8, 8, ResolutionPolicy::Exact),
            Err(RaycastError::MapResolutionMismatch { .. })
        ));
        let r = Rasterizer::new(&grid, 8, 8, ResolutionPolicy::Truncate).unwrap();
        assert_eq!((r.cell_w(), r.cell_h()), (2, 2));
    }

    #[test]
    fn camera_smaller_than_map_is_a_mismatch() {
        let grid = room();
        assert!(matches!(
            Rasterizer::new(&grid, 2, 9, ResolutionPolicy::Truncate),
            Err(RaycastError::MapResolutionMismatch { .. })
        ));
        assert_eq!(
            Rasterizer::new(&grid, 0, 9, ResolutionPolicy::Truncate),
            Err(RaycastError::ZeroResolution)
        );
    }

    #[test]
    fn replicates_blocks() {
        let grid = room();
        let raw = Rasterizer::with_cell_size(3, 2).rasterize(&grid);
        assert_eq!((raw.width(), raw.height()), (9, 6));
        for y in 2..4 {
            for x in 3..6 {
                assert_eq!(raw.get(x, y), Some(CellState::PlayerMarker));
            }
        }
        assert_eq!(raw.get(2, 2), Some(CellState::Wall));
        assert_eq!(raw.get(3, 1), Some(CellState::Wall));
        assert_eq!(raw.get(9, 0), None);
        assert_eq!(raw.count(CellState::PlayerMarker), 6);
    }

    #[test]
    fn resync_discards_markers() {
        let grid = room();
        let r = Rasterizer::with_cell_size(2, 2);
        let mut raw = r.rasterize(&grid);
        assert!(raw.set(2, 2, CellState::Visited));
        assert!(raw.set(0, 0, CellState::Hit));
        r.rasterize_into(&grid, &mut raw);
        assert_eq!(raw, r.rasterize(&grid));
    }

    #[test]
    fn text_rows_are_newline_joined() {
        let grid = room();
        let raw = Rasterizer::with_cell_size(1, 1).rasterize(&grid);
        assert_eq!(raw.to_text(), "▮▮▮\n▮C▮\n▮▮▮");
    }
}
