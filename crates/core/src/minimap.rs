//! Down-sampled diagnostic view of the raw frame.

use crate::frame::Frame;
use crate::raster::RawFrame;
use crate::types::CellState;

/// Keep every `stride`-th raw-frame row and column, then mark the camera cell.
///
/// Ray markers left by the last render pass are kept, so the minimap shows what
/// the camera saw.
pub fn render_minimap(raw: &RawFrame, camera: (i32, i32), stride: usize) -> Frame {
    let stride = stride.max(1);
    let width = raw.width().div_ceil(stride);
    let height = raw.height().div_ceil(stride);
    let mut map = Frame::new(width, height);

    for (my, row) in raw.rows().step_by(stride).enumerate() {
        for (mx, state) in row.iter().step_by(stride).enumerate() {
            map.set(mx, my, state.symbol());
        }
    }

    let (cx, cy) = camera;
    if cx >= 0 && cy >= 0 {
        map.set(
            cx as usize / stride,
            cy as usize / stride,
            CellState::PlayerMarker.symbol(),
        );
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileGrid;
    use crate::raster::Rasterizer;

    #[test]
    fn keeps_every_fourth_cell() {
        let grid = TileGrid::from_codes(&[[1u8, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        let raw = Rasterizer::with_cell_size(4, 4).rasterize(&grid);
        let map = render_minimap(&raw, (5, 5), 4);
        assert_eq!((map.width(), map.height()), (3, 3));
        assert_eq!(map.to_text(), "▮▮▮\n▮C▮\n▮▮▮");
    }

    #[test]
    fn rounds_partial_blocks_up() {
        let grid = TileGrid::from_codes(&[[1u8, 0], [0, 1]]).unwrap();
        let raw = Rasterizer::with_cell_size(3, 3).rasterize(&grid);
        let map = render_minimap(&raw, (-1, -1), 4);
        assert_eq!((map.width(), map.height()), (2, 2));
        assert_eq!(map.to_text(), "▮ \n ▮");
    }
}
