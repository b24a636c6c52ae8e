//! Start points and their reachable end points.
//!
//! A [`BasketSnapMap`] is the adjacency graph of a basket: every legal start
//! point on an outer wall, and for each the targets a divider starting there
//! may end on. The static map depends only on the basket and is memoised by
//! [`SnapMapCache`]. Placed dividers contribute extra edges through
//! [`merge_divider_edges`].

use crate::snap_grid::SnapGrid;
use basketkit_core::{
    coords_eq, Axis, BasketSpec, BasketType, Divider, SnapKey, SnapPoint, COORD_EPSILON,
};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Start points in insertion order with their adjacency lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasketSnapMap {
    start_snaps: Vec<SnapPoint>,
    targets: Vec<Vec<SnapPoint>>,
    index: HashMap<SnapKey, usize>,
}

impl BasketSnapMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a start point with its targets.
    ///
    /// If a point with the same key exists, the first-seen point and its
    /// target order are kept and only targets not already present are
    /// appended.
    pub fn insert(&mut self, snap: SnapPoint, targets: impl IntoIterator<Item = SnapPoint>) {
        let slot = match self.index.entry(snap.key()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                entry.insert(self.start_snaps.len());
                self.start_snaps.push(snap);
                self.targets.push(Vec::new());
                self.start_snaps.len() - 1
            }
        };

        let existing = &mut self.targets[slot];
        let mut seen: HashSet<SnapKey> = existing.iter().map(SnapPoint::key).collect();
        for target in targets {
            if seen.insert(target.key()) {
                existing.push(target);
            }
        }
    }

    pub fn start_snaps(&self) -> &[SnapPoint] {
        &self.start_snaps
    }

    /// Targets reachable from `start`, looked up by position. Empty when the
    /// point is not a start point.
    pub fn targets(&self, start: &SnapPoint) -> &[SnapPoint] {
        self.targets_by_key(&start.key())
    }

    pub fn targets_by_key(&self, key: &SnapKey) -> &[SnapPoint] {
        self.index
            .get(key)
            .map(|&slot| self.targets[slot].as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, point: &SnapPoint) -> bool {
        self.index.contains_key(&point.key())
    }

    /// Start points paired with their targets, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SnapPoint, &[SnapPoint])> {
        self.start_snaps
            .iter()
            .zip(self.targets.iter().map(Vec::as_slice))
    }

    pub fn len(&self) -> usize {
        self.start_snaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.start_snaps.is_empty()
    }
}

/// True when `value` is an extreme of `coords` or within one pitch of one.
fn near_corner(value: f64, coords: &[f64], pitch: f64) -> bool {
    let min = coords.iter().copied().fold(f64::INFINITY, f64::min);
    let max = coords.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let reach = pitch - COORD_EPSILON;
    coords_eq(value, min)
        || coords_eq(value, max)
        || (value - min).abs() < reach
        || (max - value).abs() < reach
}

/// Builds the static snap map of a basket.
///
/// Start points sit on the two z-edges (`side = z`, targets vary z) and the
/// two x-edges (`side = x`, targets vary x) of the internal floor.
pub fn build_snap_map(spec: &BasketSpec, grid: &SnapGrid) -> BasketSnapMap {
    let bottom = &spec.dimensions.internal_bottom;
    let half_length = bottom.length / 2.0;
    let half_width = bottom.width / 2.0;

    let config = &spec.placement.start_snaps;
    let exclude_corners = config.exclude_corners();
    let start_x = config.x.as_deref().unwrap_or(&grid.x_snaps);
    let start_z = config.z.as_deref().unwrap_or(&grid.z_snaps);

    let on_x_edge = |x: f64| coords_eq(x.abs(), half_length);
    let on_z_edge = |z: f64| coords_eq(z.abs(), half_width);

    let mut map = BasketSnapMap::new();

    for z_edge in [-half_width, half_width] {
        for &x in start_x {
            if exclude_corners && (near_corner(x, start_x, grid.x_pitch) || on_x_edge(x)) {
                continue;
            }
            let targets = grid
                .z_snaps
                .iter()
                .filter(|&&z| !coords_eq(z, z_edge))
                .map(|&z| SnapPoint::new(x, z));
            map.insert(SnapPoint::with_side(x, z_edge, Axis::Z), targets);
        }
    }

    for x_edge in [-half_length, half_length] {
        for &z in start_z {
            if exclude_corners && (near_corner(z, start_z, grid.z_pitch) || on_z_edge(z)) {
                continue;
            }
            let targets = grid
                .x_snaps
                .iter()
                .filter(|&&x| !coords_eq(x, x_edge))
                .map(|&x| SnapPoint::new(x, z));
            map.insert(SnapPoint::with_side(x_edge, z, Axis::X), targets);
        }
    }

    debug!(
        "Built snap map: {} start points ({} x, {} z candidates)",
        map.len(),
        start_x.len(),
        start_z.len()
    );
    map
}

/// Merges the static map with the edges contributed by placed dividers.
///
/// A divider along `x` at `z = position` adds a start point on its line for
/// every x snap, targeting every other z snap; dividers along `z` are
/// symmetric. Points on the line of a perpendicular divider are skipped.
pub fn merge_divider_edges(
    static_map: &BasketSnapMap,
    dividers: &[Divider],
    grid: &SnapGrid,
) -> BasketSnapMap {
    let mut merged = static_map.clone();

    let x_lines: Vec<f64> = dividers
        .iter()
        .filter(|d| d.axis == Axis::X)
        .map(|d| d.position)
        .collect();
    let z_lines: Vec<f64> = dividers
        .iter()
        .filter(|d| d.axis == Axis::Z)
        .map(|d| d.position)
        .collect();

    let crosses = |lines: &[f64], value: f64| lines.iter().any(|&line| coords_eq(line, value));

    for &z_edge in &x_lines {
        for &x in &grid.x_snaps {
            if crosses(&z_lines, x) {
                continue;
            }
            let targets = grid
                .z_snaps
                .iter()
                .filter(|&&z| !coords_eq(z, z_edge))
                .map(|&z| SnapPoint::new(x, z));
            merged.insert(SnapPoint::with_side(x, z_edge, Axis::Z), targets);
        }
    }

    for &x_edge in &z_lines {
        for &z in &grid.z_snaps {
            if crosses(&x_lines, z) {
                continue;
            }
            let targets = grid
                .x_snaps
                .iter()
                .filter(|&&x| !coords_eq(x, x_edge))
                .map(|&x| SnapPoint::new(x, z));
            merged.insert(SnapPoint::with_side(x_edge, z, Axis::X), targets);
        }
    }

    debug!(
        "Merged snap map: {} static + {} divider lines -> {} start points",
        static_map.len(),
        x_lines.len() + z_lines.len(),
        merged.len()
    );
    merged
}

/// Memoised static snap maps keyed by basket id.
///
/// An entry is rebuilt only when the basket's spec differs from the one it
/// was built from.
#[derive(Debug, Clone, Default)]
pub struct SnapMapCache {
    entries: HashMap<String, (BasketSpec, Arc<BasketSnapMap>)>,
}

impl SnapMapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&mut self, basket: &BasketType) -> Arc<BasketSnapMap> {
        if let Some((spec, map)) = self.entries.get(&basket.id) {
            if *spec == basket.spec {
                return Arc::clone(map);
            }
            debug!("Spec of basket {} changed, rebuilding snap map", basket.id);
        }

        let grid = SnapGrid::for_spec(&basket.spec);
        let map = Arc::new(build_snap_map(&basket.spec, &grid));
        self.entries
            .insert(basket.id.clone(), (basket.spec.clone(), Arc::clone(&map)));
        map
    }

    pub fn get(&self, basket_id: &str) -> Option<Arc<BasketSnapMap>> {
        self.entries.get(basket_id).map(|(_, map)| Arc::clone(map))
    }

    pub fn invalidate(&mut self, basket_id: &str) -> bool {
        self.entries.remove(basket_id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basketkit_core::{stock_spec, Catalog, DividerDraft, DividerId};

    fn stock() -> (BasketSpec, SnapGrid) {
        let spec = stock_spec();
        let grid = SnapGrid::for_spec(&spec);
        (spec, grid)
    }

    #[test]
    fn test_stock_start_snap_count() {
        let (spec, grid) = stock();
        let map = build_snap_map(&spec, &grid);
        assert_eq!(map.len(), 2 * 16 + 2 * 10);
    }

    #[test]
    fn test_corners_kept_when_not_excluded() {
        let (mut spec, grid) = stock();
        spec.placement.start_snaps.exclude_corners = Some(false);
        let map = build_snap_map(&spec, &grid);
        assert_eq!(map.len(), 2 * 18 + 2 * 12);
    }

    #[test]
    fn test_targets_vary_the_opposite_axis() {
        let (spec, grid) = stock();
        let map = build_snap_map(&spec, &grid);
        let start = SnapPoint::with_side(-203.0, 165.0, Axis::Z);
        let targets = map.targets(&start);
        assert_eq!(targets.len(), 12);
        assert!(targets.iter().all(|t| t.x == -203.0));
        assert!(targets.iter().all(|t| !coords_eq(t.z, 165.0)));
    }

    #[test]
    fn test_start_override() {
        let (mut spec, grid) = stock();
        spec.placement.start_snaps.x = Some(vec![-100.0, 0.0, 100.0]);
        spec.placement.start_snaps.exclude_corners = Some(false);
        let map = build_snap_map(&spec, &grid);
        let on_z_edges = map
            .start_snaps()
            .iter()
            .filter(|p| p.side == Some(Axis::Z))
            .count();
        assert_eq!(on_z_edges, 6);
    }

    #[test]
    fn test_insert_keeps_first_point_and_appends_new_targets() {
        let mut map = BasketSnapMap::new();
        map.insert(
            SnapPoint::with_side(0.0, 0.0, Axis::Z),
            [SnapPoint::new(0.0, 10.0)],
        );
        map.insert(
            SnapPoint::with_side(0.0, 0.0, Axis::X),
            [SnapPoint::new(0.0, 10.0), SnapPoint::new(20.0, 0.0)],
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.start_snaps()[0].side, Some(Axis::Z));
        assert_eq!(
            map.targets(&SnapPoint::new(0.0, 0.0)),
            &[SnapPoint::new(0.0, 10.0), SnapPoint::new(20.0, 0.0)]
        );
    }

    #[test]
    fn test_divider_adds_its_own_line() {
        let (spec, grid) = stock();
        let static_map = build_snap_map(&spec, &grid);
        let divider = DividerDraft {
            axis: Axis::X,
            position: 0.0,
            length: 530.0,
            height: 200.0,
            offset_along_axis: 0.0,
        }
        .into_divider(DividerId::new());

        let merged = merge_divider_edges(&static_map, &[divider], &grid);
        assert_eq!(merged.len(), static_map.len() + 18);
        let on_line = SnapPoint::new(-232.0, 0.0);
        assert!(merged.contains(&on_line));
        // z = 0 is itself a z snap and is not a target
        assert_eq!(merged.targets(&on_line).len(), 11);
    }

    #[test]
    fn test_cache_reuses_and_rebuilds() {
        let catalog = Catalog::builtin();
        let mut basket = catalog.get("b-600-400-200").unwrap().clone();
        let mut cache = SnapMapCache::new();

        let first = cache.get_or_build(&basket);
        let second = cache.get_or_build(&basket);
        assert!(Arc::ptr_eq(&first, &second));

        basket.spec.placement.start_snaps.exclude_corners = Some(false);
        let rebuilt = cache.get_or_build(&basket);
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(cache.len(), 1);
    }
}
