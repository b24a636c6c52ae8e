use crate::shapes::Rect2;
use crate::RIM_THICKNESS;
use basketkit_core::BasketSpec;
use serde::{Deserialize, Serialize};

/// Top rim: the external outline with the internal-top opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RimProfile {
    pub outer: Rect2,
    pub opening: Rect2,
    /// Height of the rim's underside
    pub elevation: f64,
    pub thickness: f64,
}

impl RimProfile {
    pub fn build(spec: &BasketSpec, height: f64) -> Self {
        let dims = &spec.dimensions;
        Self {
            outer: Rect2::centered(dims.external.length, dims.external.width),
            opening: Rect2::centered(dims.internal_top.length, dims.internal_top.width),
            elevation: height - RIM_THICKNESS,
            thickness: RIM_THICKNESS,
        }
    }

    /// Narrowest band of material between opening and outer edge.
    pub fn min_band(&self) -> f64 {
        let outer = self.outer.size();
        let opening = self.opening.size();
        ((outer.x - opening.x) / 2.0).min((outer.y - opening.y) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basketkit_core::stock_spec;

    #[test]
    fn test_rim_sits_under_top_edge() {
        let rim = RimProfile::build(&stock_spec(), 200.0);
        assert_eq!(rim.elevation, 197.0);
        assert!(rim.outer.contains_rect(&rim.opening));
        assert_eq!(rim.min_band(), 27.5);
    }
}
