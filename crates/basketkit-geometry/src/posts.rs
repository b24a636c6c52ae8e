use crate::CORNER_RADIUS;
use basketkit_core::BasketSpec;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Round post joining two walls at a corner, leaning with the taper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerPost {
    pub start: DVec3,
    pub end: DVec3,
    pub radius: f64,
}

impl CornerPost {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> DVec3 {
        (self.start + self.end) / 2.0
    }

    /// Unit vector from the floor end to the rim end.
    pub fn direction(&self) -> DVec3 {
        (self.end - self.start).normalize_or_zero()
    }
}

/// The four posts, from each internal-bottom corner up to the matching
/// internal-top corner.
pub fn corner_posts(spec: &BasketSpec, height: f64) -> [CornerPost; 4] {
    let dims = &spec.dimensions;
    let post = |x_dir: f64, z_dir: f64| CornerPost {
        start: DVec3::new(
            x_dir * dims.internal_bottom.length / 2.0,
            0.0,
            z_dir * dims.internal_bottom.width / 2.0,
        ),
        end: DVec3::new(
            x_dir * dims.internal_top.length / 2.0,
            height,
            z_dir * dims.internal_top.width / 2.0,
        ),
        radius: CORNER_RADIUS,
    };
    [
        post(1.0, 1.0),
        post(1.0, -1.0),
        post(-1.0, 1.0),
        post(-1.0, -1.0),
    ]
}
