//! Floor perforation tiles.
//!
//! The floor carries four mirrored sections of square holes anchored at the
//! internal corners. Each tile is named after the nearest long-side and
//! short-side bars so a hover can be reported as e.g. `NL3-ES2`.

use crate::bar_ids::{BarSide, SideBarMaps};
use basketkit_core::BasketSpec;
use serde::{Deserialize, Serialize};

const SECTION_COLS: u32 = 8;
const SECTION_ROWS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl TileBounds {
    pub fn contains(&self, x: f64, z: f64) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }
}

/// One square floor hole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorTile {
    pub id: String,
    pub bounds: TileBounds,
}

impl FloorTile {
    pub fn center(&self) -> (f64, f64) {
        self.bounds.center()
    }
}

/// Tiles of one section, walking away from its anchor corner.
///
/// The tile diagonally furthest from the corner is left out.
fn section_tiles(
    start_x: f64,
    start_z: f64,
    flip_x: bool,
    flip_z: bool,
    gap: f64,
    rib: f64,
) -> Vec<TileBounds> {
    let pitch = gap + rib;
    let dir_x = if flip_x { -1.0 } else { 1.0 };
    let dir_z = if flip_z { -1.0 } else { 1.0 };

    let mut tiles = Vec::with_capacity((SECTION_COLS * SECTION_ROWS - 1) as usize);
    for c in 0..SECTION_COLS {
        for r in 0..SECTION_ROWS {
            if c == SECTION_COLS - 1 && r == SECTION_ROWS - 1 {
                continue;
            }
            let base_x = start_x + c as f64 * pitch * dir_x;
            let base_z = start_z + r as f64 * pitch * dir_z;
            let min_x = if flip_x { base_x - gap } else { base_x };
            let min_z = if flip_z { base_z - gap } else { base_z };
            tiles.push(TileBounds {
                min_x,
                max_x: min_x + gap,
                min_z,
                max_z: min_z + gap,
            });
        }
    }
    tiles
}

fn tile_id(bounds: &TileBounds, bars: &SideBarMaps) -> String {
    let (x, z) = bounds.center();
    let long_side = if z >= 0.0 {
        BarSide::NorthLong
    } else {
        BarSide::SouthLong
    };
    let short_side = if x >= 0.0 {
        BarSide::EastShort
    } else {
        BarSide::WestShort
    };

    let long = bars
        .nearest(long_side, x)
        .map(|bar| bar.id.to_string())
        .unwrap_or_else(|| long_side.code().to_string());
    let short = bars
        .nearest(short_side, z)
        .map(|bar| bar.id.to_string())
        .unwrap_or_else(|| short_side.code().to_string());

    format!("{}-{}", long, short)
}

/// All floor tiles of a basket.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorTiles {
    tiles: Vec<FloorTile>,
}

impl FloorTiles {
    pub fn for_spec(spec: &BasketSpec) -> Self {
        Self::with_bars(spec, &SideBarMaps::for_spec(spec))
    }

    pub fn with_bars(spec: &BasketSpec, bars: &SideBarMaps) -> Self {
        let bottom = &spec.dimensions.internal_bottom;
        let grid = &spec.holes.grid;

        let left_x = -bottom.length / 2.0 + grid.offset_x;
        let right_x = bottom.length / 2.0 - grid.offset_x;
        let bottom_z = -bottom.width / 2.0 + grid.offset_z;
        let top_z = bottom.width / 2.0 - grid.offset_z;

        let sections = [
            (left_x, bottom_z, false, false),
            (right_x, bottom_z, true, false),
            (left_x, top_z, false, true),
            (right_x, top_z, true, true),
        ];

        let tiles = sections
            .iter()
            .flat_map(|&(x, z, flip_x, flip_z)| {
                section_tiles(x, z, flip_x, flip_z, grid.gap, grid.rib)
            })
            .map(|bounds| FloorTile {
                id: tile_id(&bounds, bars),
                bounds,
            })
            .collect();

        Self { tiles }
    }

    pub fn tiles(&self) -> &[FloorTile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile containing the point, or the tile whose centre is nearest to it.
    pub fn tile_at(&self, x: f64, z: f64) -> Option<&FloorTile> {
        if let Some(tile) = self.tiles.iter().find(|t| t.bounds.contains(x, z)) {
            return Some(tile);
        }
        self.tiles.iter().fold(None, |best: Option<&FloorTile>, tile| {
            let distance = |t: &FloorTile| {
                let (cx, cz) = t.center();
                (cx - x).powi(2) + (cz - z).powi(2)
            };
            match best {
                Some(current) if distance(tile) >= distance(current) => Some(current),
                _ => Some(tile),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basketkit_core::stock_spec;

    #[test]
    fn test_tile_count() {
        let tiles = FloorTiles::for_spec(&stock_spec());
        assert_eq!(tiles.len(), 124);
    }

    #[test]
    fn test_first_tile_anchored_at_corner() {
        let tiles = FloorTiles::for_spec(&stock_spec());
        let first = &tiles.tiles()[0];
        assert_eq!(
            first.bounds,
            TileBounds {
                min_x: -241.0,
                max_x: -225.0,
                min_z: -135.0,
                max_z: -119.0,
            }
        );
        assert_eq!(first.id, "SL1-WS1");
    }

    #[test]
    fn test_tile_at_inside_and_outside() {
        let tiles = FloorTiles::for_spec(&stock_spec());
        let inside = tiles.tile_at(-233.0, -127.0).unwrap();
        assert_eq!(inside.id, "SL1-WS1");

        let nearest = tiles.tile_at(-1000.0, -1000.0).unwrap();
        assert_eq!(nearest.id, "SL1-WS1");
    }

    #[test]
    fn test_mirrored_sections_use_their_own_walls() {
        let tiles = FloorTiles::for_spec(&stock_spec());
        let north_east = tiles.tile_at(233.0, 127.0).unwrap();
        assert!(north_east.id.starts_with("NL"));
        assert!(north_east.id.contains("-ES"));
    }
}
