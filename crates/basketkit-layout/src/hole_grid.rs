//! Hole grid builder
//!
//! Computes the coordinates along one wall track where a divider edge can
//! rest flush against a perforation bar.
//!
//! One convention is used for every track: the grid starts `margin` past the
//! track's lower edge, and coordinate `i` sits on the centre of the bar that
//! follows hole `i`, i.e. `start + gap + bar / 2 + i * pitch`. Long-side and
//! short-side tracks, bar identifiers and wall geometry all share it.

use basketkit_core::{BasketSpec, TrackSpec};

/// Ordered coordinates of one track.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleGrid {
    /// Lower edge of the first hole
    pub start: f64,
    /// Distance between consecutive coordinates
    pub pitch: f64,
    /// Strictly increasing snap coordinates, one per column
    pub centers: Vec<f64>,
}

/// Builds the grid for a track of `track_length` centred on the origin.
///
/// `cols = 0` yields an empty grid.
pub fn build_hole_grid(track_length: f64, track: &TrackSpec, margin: f64) -> HoleGrid {
    let pitch = track.pitch();
    let start = -(track_length / 2.0) + margin;
    let first = start + track.gap + track.bar / 2.0;
    let centers = (0..track.cols).map(|i| first + i as f64 * pitch).collect();

    HoleGrid {
        start,
        pitch,
        centers,
    }
}

/// Floor-level grids of the long-side and short-side tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct SideHoleGrids {
    pub long_side: HoleGrid,
    pub short_side: HoleGrid,
}

impl SideHoleGrids {
    pub fn for_spec(spec: &BasketSpec) -> Self {
        let bottom = &spec.dimensions.internal_bottom;
        let holes = &spec.holes;
        Self {
            long_side: build_hole_grid(
                bottom.length,
                &holes.long_side,
                holes.long_side.margin_bottom,
            ),
            short_side: build_hole_grid(
                bottom.width,
                &holes.short_side,
                holes.short_side.margin_bottom,
            ),
        }
    }
}
