//! Basket-wide snap grid.

use crate::hole_grid::SideHoleGrids;
use basketkit_core::{Axis, BasketSpec};

/// Every coordinate, per axis, onto which a divider endpoint may snap.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapGrid {
    /// Long-side track coordinates
    pub x_snaps: Vec<f64>,
    /// Short-side track coordinates
    pub z_snaps: Vec<f64>,
    /// Pitch of the long-side track
    pub x_pitch: f64,
    /// Pitch of the short-side track
    pub z_pitch: f64,
}

impl SnapGrid {
    pub fn for_spec(spec: &BasketSpec) -> Self {
        let grids = SideHoleGrids::for_spec(spec);
        Self {
            x_snaps: grids.long_side.centers,
            z_snaps: grids.short_side.centers,
            x_pitch: grids.long_side.pitch,
            z_pitch: grids.short_side.pitch,
        }
    }

    /// Snap coordinates along `axis`.
    pub fn snaps(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x_snaps,
            Axis::Z => &self.z_snaps,
        }
    }

    pub fn pitch(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_pitch,
            Axis::Z => self.z_pitch,
        }
    }

    /// Nearest snap coordinate on `axis`.
    pub fn nearest(&self, axis: Axis, value: f64) -> Option<f64> {
        find_closest_snap(value, self.snaps(axis))
    }
}

/// Linear nearest-neighbour scan.
///
/// Ties keep the first candidate in iteration order. Returns `None` for an
/// empty slice.
pub fn find_closest_snap(value: f64, snaps: &[f64]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for &candidate in snaps {
        match best {
            Some(current) if (candidate - value).abs() >= (current - value).abs() => {}
            _ => best = Some(candidate),
        }
    }
    best
}
