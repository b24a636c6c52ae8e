//! Coordinate types shared by the placement engine and the render layer.
//!
//! All coordinates are millimetres on the basket floor plane, with the origin
//! at the centre of the basket: `x` runs along the long side, `z` along the
//! short side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used for every comparison of derived coordinates.
pub const COORD_EPSILON: f64 = 1e-3;

/// Shortest span a divider may have, in millimetres.
pub const MIN_DIVIDER_LENGTH: f64 = 40.0;

/// Returns true when two coordinates are equal within [`COORD_EPSILON`].
#[inline]
pub fn coords_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= COORD_EPSILON
}

/// Floor axis.
///
/// For a divider, this is the direction its length is measured along.
/// `X` spans the long (length) direction, `Z` the short (width) direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Long side / length direction
    X,
    /// Short side / width direction
    Z,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Self::X => Self::Z,
            Self::Z => Self::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// A floor coordinate where a divider endpoint may rest.
///
/// `side` records which wall orientation the point was generated for:
/// `Some(Axis::Z)` for points on a z-edge (the divider will run along z),
/// `Some(Axis::X)` for points on an x-edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapPoint {
    pub x: f64,
    pub z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Axis>,
}

impl SnapPoint {
    /// Creates a snap point without a side.
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z, side: None }
    }

    /// Creates a snap point tagged with the wall orientation it belongs to.
    pub fn with_side(x: f64, z: f64, side: Axis) -> Self {
        Self {
            x,
            z,
            side: Some(side),
        }
    }

    /// Coordinate on the given axis.
    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Z => self.z,
        }
    }

    /// Canonical map key for this point.
    pub fn key(&self) -> SnapKey {
        SnapKey::new(self.x, self.z)
    }

    /// True when both coordinates match within tolerance. The side is ignored.
    pub fn same_position(&self, other: &SnapPoint) -> bool {
        coords_eq(self.x, other.x) && coords_eq(self.z, other.z)
    }
}

/// Canonical key of a snap point.
///
/// Coordinates are quantised to the tolerance grid so that points produced
/// by different arithmetic paths collapse onto the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnapKey {
    x: i64,
    z: i64,
}

impl SnapKey {
    pub fn new(x: f64, z: f64) -> Self {
        Self {
            x: quantize(x),
            z: quantize(z),
        }
    }
}

/// Key units per millimetre; one unit is one [`COORD_EPSILON`].
const KEY_SCALE: f64 = 1000.0;

fn quantize(value: f64) -> i64 {
    (value * KEY_SCALE).round() as i64
}

impl fmt::Display for SnapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.x as f64 / KEY_SCALE;
        let z = self.z as f64 / KEY_SCALE;
        write!(f, "{}-{}", x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_eq_tolerance() {
        assert!(coords_eq(1.0, 1.0005));
        assert!(coords_eq(-265.0, -265.001));
        assert!(!coords_eq(1.0, 1.01));
    }

    #[test]
    fn test_snap_key_collapses_rounding_noise() {
        let a = SnapPoint::new(0.1 + 0.2, 165.0);
        let b = SnapPoint::new(0.3, 165.0);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_snap_key_display() {
        assert_eq!(SnapKey::new(-265.0, 165.0).to_string(), "-265-165");
        assert_eq!(SnapKey::new(97.5, 0.0).to_string(), "97.5-0");
    }

    #[test]
    fn test_axis_serde_lowercase() {
        let json = serde_json::to_string(&Axis::Z).unwrap();
        assert_eq!(json, "\"z\"");
        let axis: Axis = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(axis, Axis::X);
        assert_eq!(Axis::X.cross(), Axis::Z);
    }

    #[test]
    fn test_snap_point_side_is_optional_in_json() {
        let point: SnapPoint = serde_json::from_str(r#"{"x":1.0,"z":2.0}"#).unwrap();
        assert_eq!(point.side, None);
        let json = serde_json::to_string(&SnapPoint::with_side(1.0, 2.0, Axis::X)).unwrap();
        assert!(json.contains("\"side\":\"x\""));
    }
}
