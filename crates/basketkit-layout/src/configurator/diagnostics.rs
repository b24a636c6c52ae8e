//! Hover diagnostics.

use super::Configurator;
use crate::bar_ids::{BarDescriptor, SideBarMaps};
use crate::floor_grid::{FloorTile, FloorTiles};
use basketkit_core::Axis;

impl Configurator {
    /// Nearest bar along `axis` to a floor point.
    pub fn nearest_bar(&self, axis: Axis, x: f64, z: f64) -> Option<&BarDescriptor> {
        self.state.bars.nearest_to_point(axis, x, z)
    }

    /// Floor tile under the pointer, or the closest one.
    pub fn floor_tile_at(&self, x: f64, z: f64) -> Option<&FloorTile> {
        self.state.tiles.tile_at(x, z)
    }

    pub fn bars(&self) -> &SideBarMaps {
        &self.state.bars
    }

    pub fn floor_tiles(&self) -> &FloorTiles {
        &self.state.tiles
    }
}
