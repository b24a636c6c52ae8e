//! Stable identifiers for wall perforation bars.
//!
//! Each wall carries `cols - 1` bars between its holes. Bars are named by
//! wall and 1-based index (`NL1`, `ES4`, ...) so hover diagnostics can report
//! exactly which bar a pointer is over.

use crate::hole_grid::{HoleGrid, SideHoleGrids};
use basketkit_core::{Axis, BasketSpec};
use std::collections::HashMap;
use std::fmt;

/// Wall a bar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BarSide {
    /// North long wall (z > 0)
    NorthLong,
    /// South long wall (z < 0)
    SouthLong,
    /// East short wall (x > 0)
    EastShort,
    /// West short wall (x < 0)
    WestShort,
}

impl BarSide {
    pub const ALL: [BarSide; 4] = [
        BarSide::NorthLong,
        BarSide::SouthLong,
        BarSide::EastShort,
        BarSide::WestShort,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::NorthLong => "NL",
            Self::SouthLong => "SL",
            Self::EastShort => "ES",
            Self::WestShort => "WS",
        }
    }

    /// Axis along which bars of this wall are laid out.
    pub fn axis(self) -> Axis {
        match self {
            Self::NorthLong | Self::SouthLong => Axis::X,
            Self::EastShort | Self::WestShort => Axis::Z,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::NorthLong => 0,
            Self::SouthLong => 1,
            Self::EastShort => 2,
            Self::WestShort => 3,
        }
    }
}

impl fmt::Display for BarSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identifier of a single bar, e.g. `NL3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BarId {
    pub side: BarSide,
    pub index: u32,
}

impl fmt::Display for BarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side, self.index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpan {
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarDescriptor {
    pub id: BarId,
    /// Centre along the wall's axis
    pub center: f64,
    pub span: BarSpan,
}

fn side_bars(
    side: BarSide,
    grid: &HoleGrid,
    gap: f64,
    bar: f64,
    count: u32,
) -> Vec<BarDescriptor> {
    (0..count)
        .map(|i| {
            let center = grid.start + gap + bar / 2.0 + i as f64 * grid.pitch;
            BarDescriptor {
                id: BarId {
                    side,
                    index: i + 1,
                },
                center,
                span: BarSpan {
                    start: center - bar / 2.0,
                    end: center + bar / 2.0,
                },
            }
        })
        .collect()
}

/// All bars of a basket, indexed by wall and by id.
#[derive(Debug, Clone)]
pub struct SideBarMaps {
    bars: [Vec<BarDescriptor>; 4],
    by_id: HashMap<String, BarDescriptor>,
}

impl SideBarMaps {
    pub fn for_spec(spec: &BasketSpec) -> Self {
        let grids = SideHoleGrids::for_spec(spec);
        let long = &spec.holes.long_side;
        let short = &spec.holes.short_side;
        let long_count = long.cols.saturating_sub(1);
        let short_count = short.cols.saturating_sub(1);

        let bars = [
            side_bars(BarSide::NorthLong, &grids.long_side, long.gap, long.bar, long_count),
            side_bars(BarSide::SouthLong, &grids.long_side, long.gap, long.bar, long_count),
            side_bars(BarSide::EastShort, &grids.short_side, short.gap, short.bar, short_count),
            side_bars(BarSide::WestShort, &grids.short_side, short.gap, short.bar, short_count),
        ];

        let by_id = bars
            .iter()
            .flatten()
            .map(|bar| (bar.id.to_string(), *bar))
            .collect();

        Self { bars, by_id }
    }

    /// Bars of one wall, in ascending coordinate order.
    pub fn side(&self, side: BarSide) -> &[BarDescriptor] {
        &self.bars[side.index()]
    }

    /// Looks up a bar by its textual id, e.g. `"ES4"`.
    pub fn get(&self, id: &str) -> Option<&BarDescriptor> {
        self.by_id.get(id)
    }

    /// Bars laid out along `axis`: both long walls for `x`, both short walls for `z`.
    pub fn by_axis(&self, axis: Axis) -> impl Iterator<Item = &BarDescriptor> {
        BarSide::ALL
            .into_iter()
            .filter(move |side| side.axis() == axis)
            .flat_map(move |side| self.side(side).iter())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Bar of `side` whose centre is closest to `coordinate`. Ties keep the lower index.
    pub fn nearest(&self, side: BarSide, coordinate: f64) -> Option<&BarDescriptor> {
        self.side(side).iter().fold(None, |best, bar| match best {
            Some(current)
                if (bar.center - coordinate).abs() >= (current.center - coordinate).abs() =>
            {
                Some(current)
            }
            _ => Some(bar),
        })
    }

    /// Bar nearest to a floor point, on the wall closest to it for `axis`.
    ///
    /// For `x` the long wall on the point's z half is used, for `z` the short
    /// wall on its x half.
    pub fn nearest_to_point(&self, axis: Axis, x: f64, z: f64) -> Option<&BarDescriptor> {
        match axis {
            Axis::X => {
                let side = if z >= 0.0 {
                    BarSide::NorthLong
                } else {
                    BarSide::SouthLong
                };
                self.nearest(side, x)
            }
            Axis::Z => {
                let side = if x >= 0.0 {
                    BarSide::EastShort
                } else {
                    BarSide::WestShort
                };
                self.nearest(side, z)
            }
        }
    }
}
