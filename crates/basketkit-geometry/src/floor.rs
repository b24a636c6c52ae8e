use crate::shapes::Rect2;
use crate::FLOOR_THICKNESS;
use basketkit_core::BasketSpec;
use basketkit_layout::FloorTiles;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Basket floor in the x/z plane, with its square perforations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorProfile {
    pub outline: Rect2,
    pub holes: Vec<Rect2>,
    pub thickness: f64,
}

impl FloorProfile {
    pub fn build(spec: &BasketSpec) -> Self {
        Self::from_tiles(spec, &FloorTiles::for_spec(spec))
    }

    pub fn from_tiles(spec: &BasketSpec, tiles: &FloorTiles) -> Self {
        let bottom = &spec.dimensions.internal_bottom;
        let holes = tiles
            .tiles()
            .iter()
            .map(|tile| {
                let b = &tile.bounds;
                Rect2::new(DVec2::new(b.min_x, b.min_z), DVec2::new(b.max_x, b.max_z))
            })
            .collect();

        Self {
            outline: Rect2::centered(bottom.length, bottom.width),
            holes,
            thickness: FLOOR_THICKNESS,
        }
    }

    /// Solid floor area left after the perforations.
    pub fn solid_area(&self) -> f64 {
        self.outline.area() - self.holes.iter().map(Rect2::area).sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basketkit_core::stock_spec;

    #[test]
    fn test_floor_holes_inside_outline() {
        let floor = FloorProfile::build(&stock_spec());
        assert_eq!(floor.holes.len(), 124);
        assert!(floor.holes.iter().all(|h| floor.outline.contains_rect(h)));
        assert_eq!(floor.solid_area(), 530.0 * 330.0 - 124.0 * 256.0);
    }
}
