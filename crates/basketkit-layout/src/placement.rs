//! Placement engine
//!
//! Turns a selected start point and a hovered or clicked end point into a
//! divider draft. The engine owns the merged snap map (static edges plus the
//! edges of placed dividers) and the transient selection state of one
//! placement gesture.

use crate::snap_grid::SnapGrid;
use crate::snap_map::{merge_divider_edges, BasketSnapMap};
use basketkit_core::{
    coords_eq, Axis, BasketType, Divider, DividerDraft, Outline, SnapPoint, MIN_DIVIDER_LENGTH,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Prospective divider shown while a start is selected and an end hovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhostDivider {
    pub draft: DividerDraft,
    /// True when the span was too short and the full-span default was used
    pub fallback: bool,
}

#[derive(Debug, Clone)]
pub struct PlacementEngine {
    static_map: Arc<BasketSnapMap>,
    merged: BasketSnapMap,
    grid: SnapGrid,
    floor: Outline,
    divider_height: f64,
    /// Cross coordinates of placed dividers along x
    x_lines: Vec<f64>,
    /// Cross coordinates of placed dividers along z
    z_lines: Vec<f64>,
    selected_start: Option<SnapPoint>,
    hovered_end: Option<SnapPoint>,
}

impl PlacementEngine {
    pub fn new(basket: &BasketType, static_map: Arc<BasketSnapMap>, grid: SnapGrid) -> Self {
        let merged = (*static_map).clone();
        Self {
            static_map,
            merged,
            grid,
            floor: basket.spec.dimensions.internal_bottom,
            divider_height: basket.divider_height(),
            x_lines: Vec::new(),
            z_lines: Vec::new(),
            selected_start: None,
            hovered_end: None,
        }
    }

    /// Recomputes the merged snap map for the current divider set.
    ///
    /// The selection is always cleared, since its coordinates may no longer
    /// be valid.
    pub fn refresh(&mut self, dividers: &[Divider]) {
        self.merged = merge_divider_edges(&self.static_map, dividers, &self.grid);
        self.x_lines = lines(dividers, Axis::X);
        self.z_lines = lines(dividers, Axis::Z);
        self.clear_selection();
    }

    pub fn snap_map(&self) -> &BasketSnapMap {
        &self.merged
    }

    pub fn grid(&self) -> &SnapGrid {
        &self.grid
    }

    pub fn start_snaps(&self) -> &[SnapPoint] {
        self.merged.start_snaps()
    }

    /// End markers for the selected start, empty without a selection.
    pub fn end_snaps(&self) -> Vec<SnapPoint> {
        self.selected_start
            .map(|start| self.end_snaps_for(&start))
            .unwrap_or_default()
    }

    /// Targets of `start` that are colinear with it on its run axis.
    ///
    /// With `side = z` the divider runs along z (x held), with `side = x` it
    /// runs along x (z held). Without a side the allowed axes are inferred
    /// from which edges the point lies on.
    pub fn end_snaps_for(&self, start: &SnapPoint) -> Vec<SnapPoint> {
        let (along_z, along_x) = match start.side {
            Some(Axis::Z) => (true, false),
            Some(Axis::X) => (false, true),
            None => self.edge_axes(start),
        };

        self.merged
            .targets(start)
            .iter()
            .filter(|target| {
                let varies_z = coords_eq(target.x, start.x) && !coords_eq(target.z, start.z);
                let varies_x = coords_eq(target.z, start.z) && !coords_eq(target.x, start.x);
                (along_z && varies_z) || (along_x && varies_x)
            })
            .copied()
            .collect()
    }

    /// Which run axes a side-less point allows: `(along z, along x)`.
    fn edge_axes(&self, point: &SnapPoint) -> (bool, bool) {
        let half_length = self.floor.length / 2.0;
        let half_width = self.floor.width / 2.0;

        let on_z_edge = coords_eq(point.z.abs(), half_width)
            || self.x_lines.iter().any(|&z| coords_eq(z, point.z));
        let on_x_edge = coords_eq(point.x.abs(), half_length)
            || self.z_lines.iter().any(|&x| coords_eq(x, point.x));

        match (on_z_edge, on_x_edge) {
            (false, false) => (true, true),
            edges => edges,
        }
    }

    /// Resolves two points into a draft, reporting whether the fallback span
    /// was used.
    ///
    /// Returns `None` for identical or diagonal points.
    pub fn resolve(&self, start: &SnapPoint, end: &SnapPoint) -> Option<GhostDivider> {
        let same_x = coords_eq(end.x, start.x);
        let same_z = coords_eq(end.z, start.z);

        let axis = match (same_x, same_z) {
            (false, true) => Axis::X,
            (true, false) => Axis::Z,
            _ => return None,
        };

        let delta = (end.coord(axis) - start.coord(axis)).abs();
        let position = start.coord(axis.cross());
        let fallback = delta < MIN_DIVIDER_LENGTH;

        let (length, offset_along_axis) = if fallback {
            let full = match axis {
                Axis::X => self.floor.length,
                Axis::Z => self.floor.width,
            };
            (full, 0.0)
        } else {
            (delta, (end.coord(axis) + start.coord(axis)) / 2.0)
        };

        Some(GhostDivider {
            draft: DividerDraft {
                axis,
                position,
                length,
                height: self.divider_height,
                offset_along_axis,
            },
            fallback,
        })
    }

    /// Draft for a start/end pair, `None` when the pair is not colinear.
    pub fn compute_divider(&self, start: &SnapPoint, end: &SnapPoint) -> Option<DividerDraft> {
        self.resolve(start, end).map(|ghost| ghost.draft)
    }

    pub fn handle_start_click(&mut self, snap: SnapPoint) {
        self.selected_start = Some(snap);
        self.hovered_end = None;
    }

    pub fn set_hovered_end(&mut self, snap: Option<SnapPoint>) {
        self.hovered_end = snap;
    }

    /// Confirms the gesture. Returns the draft to place and clears the
    /// selection, or `None` when there is no start or the pair is invalid.
    pub fn handle_end_click(&mut self, snap: SnapPoint) -> Option<DividerDraft> {
        let start = self.selected_start?;
        let draft = self.compute_divider(&start, &snap)?;
        debug!(
            "Placement confirmed: axis {} at {} length {}",
            draft.axis, draft.position, draft.length
        );
        self.clear_selection();
        Some(draft)
    }

    /// Ghost divider while both a start and a hovered end are set.
    pub fn preview(&self) -> Option<GhostDivider> {
        match (&self.selected_start, &self.hovered_end) {
            (Some(start), Some(end)) => self.resolve(start, end),
            _ => None,
        }
    }

    pub fn selected_start(&self) -> Option<SnapPoint> {
        self.selected_start
    }

    pub fn hovered_end(&self) -> Option<SnapPoint> {
        self.hovered_end
    }

    pub fn clear_selection(&mut self) {
        self.selected_start = None;
        self.hovered_end = None;
    }
}

fn lines(dividers: &[Divider], axis: Axis) -> Vec<f64> {
    dividers
        .iter()
        .filter(|d| d.axis == axis)
        .map(|d| d.position)
        .collect()
}
