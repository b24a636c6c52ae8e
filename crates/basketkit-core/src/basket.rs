//! Basket specifications
//!
//! A [`BasketSpec`] describes the physical perforation layout of one basket
//! size. It is immutable for the lifetime of a session and is the single
//! source for snap grids, snap maps and procedural geometry.

use crate::error::SpecError;
use serde::{Deserialize, Serialize};

/// Rectangular outline on the floor plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub length: f64,
    pub width: f64,
}

/// Outer envelope of the basket, including height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Nested outlines of the basket body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub external: Envelope,
    pub internal_top: Outline,
    pub internal_bottom: Outline,
}

/// One row of perforation holes along a wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSpec {
    /// Holes per track
    pub cols: u32,
    /// Hole opening width
    pub gap: f64,
    /// Solid material between two holes
    pub bar: f64,
    /// Offset from the track edge to the first hole at floor height
    pub margin_bottom: f64,
    /// Offset from the track edge to the first hole at rim height
    pub margin_top: f64,
}

impl TrackSpec {
    /// Distance between two consecutive holes.
    pub fn pitch(&self) -> f64 {
        self.gap + self.bar
    }

    fn validate(&self, track: &str) -> Result<(), SpecError> {
        let invalid = |reason: String| SpecError::InvalidTrack {
            track: track.to_string(),
            reason,
        };

        if self.cols < 1 {
            return Err(invalid("cols must be at least 1".to_string()));
        }
        if !(self.gap.is_finite() && self.gap > 0.0) {
            return Err(invalid(format!("gap must be > 0, got {}", self.gap)));
        }
        if !(self.bar.is_finite() && self.bar > 0.0) {
            return Err(invalid(format!("bar must be > 0, got {}", self.bar)));
        }
        if !(self.margin_bottom.is_finite() && self.margin_bottom >= 0.0) {
            return Err(invalid(format!(
                "marginBottom must be >= 0, got {}",
                self.margin_bottom
            )));
        }
        if !(self.margin_top.is_finite() && self.margin_top >= 0.0) {
            return Err(invalid(format!(
                "marginTop must be >= 0, got {}",
                self.margin_top
            )));
        }
        Ok(())
    }
}

/// Heights of the horizontal hole rows on a wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalSpec {
    pub bottom_hole_height: f64,
    /// Solid strip separating two hole rows
    pub rail_height: f64,
    pub top_hole_height: f64,
}

/// Square floor perforation layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorGridSpec {
    pub gap: f64,
    pub rib: f64,
    pub offset_x: f64,
    pub offset_z: f64,
}

/// All perforation layouts of one basket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleSpec {
    pub long_side: TrackSpec,
    pub short_side: TrackSpec,
    pub vertical: VerticalSpec,
    pub grid: FloorGridSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RimSpec {
    pub width: f64,
}

/// Overrides for which grid coordinates may serve as divider start points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSnapConfig {
    /// Allowed x coordinates for start points on the z edges.
    /// Defaults to every x snap when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    /// Allowed z coordinates for start points on the x edges.
    /// Defaults to every z snap when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<f64>>,
    /// Omit start points at or next to the basket corners. Defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_corners: Option<bool>,
}

impl StartSnapConfig {
    pub fn exclude_corners(&self) -> bool {
        self.exclude_corners.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConfig {
    #[serde(default)]
    pub start_snaps: StartSnapConfig,
}

/// Physical specification of one basket size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketSpec {
    pub dimensions: Dimensions,
    pub holes: HoleSpec,
    pub rim: RimSpec,
    #[serde(default)]
    pub placement: PlacementConfig,
}

impl BasketSpec {
    /// Validates track spacing, dimensions and outline nesting.
    pub fn validate(&self) -> Result<(), SpecError> {
        let dims = &self.dimensions;
        positive("external.length", dims.external.length)?;
        positive("external.width", dims.external.width)?;
        positive("external.height", dims.external.height)?;
        positive("internalTop.length", dims.internal_top.length)?;
        positive("internalTop.width", dims.internal_top.width)?;
        positive("internalBottom.length", dims.internal_bottom.length)?;
        positive("internalBottom.width", dims.internal_bottom.width)?;
        positive("rim.width", self.rim.width)?;

        if dims.internal_bottom.length > dims.internal_top.length
            || dims.internal_bottom.width > dims.internal_top.width
        {
            return Err(SpecError::NestingViolation(
                "internal bottom exceeds internal top".to_string(),
            ));
        }
        if dims.internal_top.length > dims.external.length
            || dims.internal_top.width > dims.external.width
        {
            return Err(SpecError::NestingViolation(
                "internal top exceeds external outline".to_string(),
            ));
        }

        self.holes.long_side.validate("longSide")?;
        self.holes.short_side.validate("shortSide")?;

        let vertical = &self.holes.vertical;
        positive("vertical.bottomHoleHeight", vertical.bottom_hole_height)?;
        positive("vertical.railHeight", vertical.rail_height)?;
        positive("vertical.topHoleHeight", vertical.top_hole_height)?;

        let grid = &self.holes.grid;
        if !(grid.gap > 0.0 && grid.rib > 0.0) {
            return Err(SpecError::InvalidFloorGrid(format!(
                "gap and rib must be > 0, got {} and {}",
                grid.gap, grid.rib
            )));
        }
        if grid.offset_x < 0.0 || grid.offset_z < 0.0 {
            return Err(SpecError::InvalidFloorGrid(
                "offsets must be >= 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), SpecError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SpecError::InvalidDimension {
            name: name.to_string(),
            value,
        })
    }
}

/// Nominal size shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasketSize {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

/// A selectable basket: nominal size plus physical specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketType {
    pub id: String,
    pub name: String,
    pub size: BasketSize,
    pub spec: BasketSpec,
}

impl BasketType {
    /// Height given to newly placed dividers.
    pub fn divider_height(&self) -> f64 {
        self.size.height
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        positive("size.width", self.size.width)?;
        positive("size.depth", self.size.depth)?;
        positive("size.height", self.size.height)?;
        self.spec.validate()
    }
}
