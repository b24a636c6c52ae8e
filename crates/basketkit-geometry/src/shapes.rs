//! Primitive shapes shared by the basket and divider descriptions.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in a 2D profile plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect2 {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given size centred on the origin.
    pub fn centered(width: f64, height: f64) -> Self {
        let half = DVec2::new(width / 2.0, height / 2.0);
        Self {
            min: -half,
            max: half,
        }
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    pub fn area(&self) -> f64 {
        let size = self.size();
        size.x * size.y
    }

    pub fn contains_rect(&self, other: &Rect2) -> bool {
        other.min.cmpge(self.min).all() && other.max.cmple(self.max).all()
    }
}

/// Axis-aligned box in basket space (x along the length, y up, z along the
/// width).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box3 {
    pub center: DVec3,
    pub size: DVec3,
}

impl Box3 {
    pub fn new(center: DVec3, size: DVec3) -> Self {
        Self { center, size }
    }

    pub fn min(&self) -> DVec3 {
        self.center - self.size / 2.0
    }

    pub fn max(&self) -> DVec3 {
        self.center + self.size / 2.0
    }

    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }
}
