use crate::floor::FloorProfile;
use crate::posts::{corner_posts, CornerPost};
use crate::rim::RimProfile;
use crate::wall::{hole_rows, HoleRow, Wall, WallSide};
use basketkit_core::BasketType;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete procedural description of one basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketGeometry {
    pub basket_id: String,
    pub height: f64,
    pub rows: Vec<HoleRow>,
    pub walls: Vec<Wall>,
    pub floor: FloorProfile,
    pub rim: RimProfile,
    pub posts: [CornerPost; 4],
}

impl BasketGeometry {
    pub fn build(basket: &BasketType) -> Self {
        let spec = &basket.spec;
        let height = spec.dimensions.external.height;
        let rows = hole_rows(height, &spec.holes.vertical);

        let walls: Vec<Wall> = WallSide::ALL
            .iter()
            .map(|&side| Wall::build(side, spec, height, &rows))
            .collect();

        let geometry = Self {
            basket_id: basket.id.clone(),
            height,
            walls,
            floor: FloorProfile::build(spec),
            rim: RimProfile::build(spec, height),
            posts: corner_posts(spec, height),
            rows,
        };

        debug!(
            "Built geometry for {}: {} rows, {} wall holes, {} floor holes",
            basket.id,
            geometry.rows.len(),
            geometry.wall_hole_count(),
            geometry.floor.holes.len()
        );
        geometry
    }

    pub fn wall(&self, side: WallSide) -> Option<&Wall> {
        self.walls.iter().find(|w| w.side == side)
    }

    pub fn wall_hole_count(&self) -> usize {
        self.walls.iter().map(|w| w.profile.holes.len()).sum()
    }
}
