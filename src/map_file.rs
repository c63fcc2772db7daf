//! JSON map files and the built-in map.
//!
//! Two shapes are accepted:
//!
//! ```text
//! [[1,1,1],[1,2,1],[1,1,1]]
//! {"name": "closet", "tiles": [[1,1,1],[1,2,1],[1,1,1]]}
//! ```

use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::core::TileGrid;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MapFile {
    Rows(Vec<Vec<u8>>),
    Named {
        #[serde(default)]
        name: Option<String>,
        tiles: Vec<Vec<u8>>,
    },
}

/// 10x8 tiles; divides the default 160x40 camera into 16x5 blocks.
const BUILTIN_MAP: [[u8; 10]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 2, 0, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

pub fn builtin_map() -> Result<TileGrid> {
    Ok(TileGrid::from_codes(&BUILTIN_MAP)?)
}

/// Parse a map from JSON text.
pub fn parse_map(json: &str) -> Result<TileGrid> {
    let file: MapFile = serde_json::from_str(json).map_err(|e| anyhow!("map: invalid JSON: {}", e))?;
    let (name, tiles) = match file {
        MapFile::Rows(tiles) => (None, tiles),
        MapFile::Named { name, tiles } => (name, tiles),
    };
    TileGrid::from_codes(&tiles).map_err(|e| match name {
        Some(name) => anyhow!("map {}: {}", name, e),
        None => anyhow!("map: {}", e),
    })
}

/// Read and parse a map file.
pub fn load_map(path: &Path) -> Result<TileGrid> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("map: cannot read {}: {}", path.display(), e))?;
    parse_map(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_map_fits_the_default_camera() {
        let grid = builtin_map().unwrap();
        assert_eq!((grid.cols(), grid.rows()), (10, 8));
        assert!(grid.validate_enclosed().is_ok());
        assert_eq!(grid.player_marker(), Some((2, 2)));
    }
}
