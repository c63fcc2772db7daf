use tui_raycast::core::{Rasterizer, RaycastError, ResolutionPolicy, TileGrid};
use tui_raycast::types::{CellState, Tile};

fn closet() -> TileGrid {
    TileGrid::from_codes(&[[1u8, 1, 1], [1, 2, 1], [1, 1, 1]]).unwrap()
}

#[test]
fn exact_policy_requires_divisible_resolution() {
    let grid = closet();
    let r = Rasterizer::new(&grid, 9, 9, ResolutionPolicy::Exact).unwrap();
    assert_eq!((r.cell_w(), r.cell_h()), (3, 3));

    assert_eq!(
        Rasterizer::new(&grid, 8, 8, ResolutionPolicy::Exact),
        Err(RaycastError::MapResolutionMismatch {
            map_cols: 3,
            map_rows: 3,
            width: 8,
            height: 8,
        })
    );
}

#[test]
fn truncate_policy_floors_cell_size() {
    let grid = closet();
    let r = Rasterizer::new(&grid, 8, 8, ResolutionPolicy::Truncate).unwrap();
    assert_eq!((r.cell_w(), r.cell_h()), (2, 2));

    let raw = r.rasterize(&grid);
    assert_eq!((raw.width(), raw.height()), (6, 6));
}

#[test]
fn resolution_smaller_than_map_is_rejected_under_both_policies() {
    let grid = closet();
    for policy in [ResolutionPolicy::Exact, ResolutionPolicy::Truncate] {
        assert!(matches!(
            Rasterizer::new(&grid, 2, 9, policy),
            Err(RaycastError::MapResolutionMismatch { .. })
        ));
    }
    assert_eq!(
        Rasterizer::new(&grid, 0, 9, ResolutionPolicy::Exact),
        Err(RaycastError::ZeroResolution)
    );
}

#[test]
fn every_tile_becomes_a_uniform_block() {
    let grid = TileGrid::from_codes(&[[1u8, 0], [2, 1]]).unwrap();
    let r = Rasterizer::with_cell_size(3, 2);
    let raw = r.rasterize(&grid);
    assert_eq!((raw.width(), raw.height()), (6, 4));

    for y in 0..4 {
        for x in 0..6 {
            let tile = grid.get(y as usize / 2, x as usize / 3).unwrap();
            assert_eq!(raw.get(x, y), Some(CellState::from(tile)), "cell ({x}, {y})");
        }
    }
}

#[test]
fn sampling_blocks_recovers_the_grid() {
    let codes = [
        [1u8, 1, 1, 1, 1],
        [1, 0, 0, 2, 1],
        [1, 0, 1, 0, 1],
        [1, 1, 1, 1, 1],
    ];
    let grid = TileGrid::from_codes(&codes).unwrap();
    let r = Rasterizer::new(&grid, 20, 12, ResolutionPolicy::Exact).unwrap();
    let raw = r.rasterize(&grid);

    let sampled: Vec<Vec<u8>> = r
        .sample_tiles(&raw)
        .iter()
        .map(|row| row.iter().map(Tile::code).collect())
        .collect();
    assert_eq!(sampled, grid.to_codes());
}

#[test]
fn rerasterizing_clears_ray_markers() {
    let grid = closet();
    let r = Rasterizer::with_cell_size(3, 3);
    let mut raw = r.rasterize(&grid);
    let clean = raw.clone();

    assert!(raw.set(0, 0, CellState::Hit));
    assert!(raw.set(4, 4, CellState::Visited));
    assert_ne!(raw, clean);

    r.rasterize_into(&grid, &mut raw);
    assert_eq!(raw, clean);
}

#[test]
fn map_validation_reports_the_offending_tile() {
    assert_eq!(
        TileGrid::from_codes::<[u8; 0]>(&[]),
        Err(RaycastError::EmptyMap)
    );
    assert_eq!(
        TileGrid::from_codes(&[vec![1u8, 1, 1], vec![1, 1]]),
        Err(RaycastError::RaggedMap {
            row: 1,
            expected: 3,
            found: 2,
        })
    );
    assert_eq!(
        TileGrid::from_codes(&[[1u8, 7]]),
        Err(RaycastError::UnknownTileCode {
            code: 7,
            row: 0,
            col: 1,
        })
    );

    let open = TileGrid::from_codes(&[[1u8, 1, 1], [1, 0, 0], [1, 1, 1]]).unwrap();
    assert_eq!(
        open.validate_enclosed(),
        Err(RaycastError::MapNotEnclosed { row: 1, col: 2 })
    );
}
