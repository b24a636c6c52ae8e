//! Divider computation from start/end pairs.

use basketkit_core::{Axis, Catalog, SnapPoint};
use basketkit_layout::{build_snap_map, PlacementEngine, SnapGrid};
use proptest::prelude::*;
use std::sync::Arc;

fn engine_for(basket_id: &str) -> PlacementEngine {
    let catalog = Catalog::builtin();
    let basket = catalog.get(basket_id).unwrap();
    let grid = SnapGrid::for_spec(&basket.spec);
    let map = Arc::new(build_snap_map(&basket.spec, &grid));
    PlacementEngine::new(basket, map, grid)
}

#[test]
fn test_scenario_a_full_depth_divider_from_top_edge() {
    let mut engine = engine_for("b-600-400-200");

    engine.handle_start_click(SnapPoint::with_side(-265.0, 165.0, Axis::Z));
    engine.set_hovered_end(Some(SnapPoint::new(-265.0, -165.0)));

    let ghost = engine.preview().unwrap();
    assert!(!ghost.fallback);
    assert_eq!(ghost.draft.axis, Axis::Z);
    assert_eq!(ghost.draft.position, -265.0);
    assert_eq!(ghost.draft.length, 330.0);
    assert_eq!(ghost.draft.offset_along_axis, 0.0);
    assert_eq!(ghost.draft.height, 200.0);

    let placed = engine
        .handle_end_click(SnapPoint::new(-265.0, -165.0))
        .unwrap();
    assert_eq!(placed, ghost.draft);
}

#[test]
fn test_scenario_b_near_zero_drag_becomes_full_length() {
    let engine = engine_for("b-600-400-200");

    let ghost = engine
        .resolve(&SnapPoint::new(10.0, 100.0), &SnapPoint::new(15.0, 100.0))
        .unwrap();

    assert!(ghost.fallback);
    assert_eq!(ghost.draft.axis, Axis::X);
    assert_eq!(ghost.draft.position, 100.0);
    assert_eq!(ghost.draft.length, 530.0);
    assert_eq!(ghost.draft.offset_along_axis, 0.0);
}

#[test]
fn test_divider_height_follows_basket() {
    let engine = engine_for("b-600-400-100");
    let draft = engine
        .compute_divider(&SnapPoint::new(0.0, -135.0), &SnapPoint::new(0.0, 162.0))
        .unwrap();
    assert_eq!(draft.height, 100.0);
}

#[test]
fn test_exactly_min_length_is_kept() {
    let engine = engine_for("b-600-400-200");
    let ghost = engine
        .resolve(&SnapPoint::new(0.0, 0.0), &SnapPoint::new(40.0, 0.0))
        .unwrap();
    assert!(!ghost.fallback);
    assert_eq!(ghost.draft.length, 40.0);
    assert_eq!(ghost.draft.offset_along_axis, 20.0);
}

#[test]
fn test_rounding_noise_still_counts_as_colinear() {
    let engine = engine_for("b-600-400-200");
    let draft = engine
        .compute_divider(
            &SnapPoint::new(0.1 + 0.2, -135.0),
            &SnapPoint::new(0.3, 162.0),
        )
        .unwrap();
    assert_eq!(draft.axis, Axis::Z);
}

proptest! {
    #[test]
    fn identical_points_never_make_a_divider(x in -300.0f64..300.0, z in -200.0f64..200.0) {
        let engine = engine_for("b-600-400-200");
        let p = SnapPoint::new(x, z);
        prop_assert!(engine.compute_divider(&p, &p).is_none());
    }

    #[test]
    fn diagonal_points_never_make_a_divider(
        x1 in -300.0f64..300.0,
        z1 in -200.0f64..200.0,
        dx in 0.01f64..300.0,
        dz in 0.01f64..300.0,
    ) {
        let engine = engine_for("b-600-400-200");
        let start = SnapPoint::new(x1, z1);
        let end = SnapPoint::new(x1 + dx, z1 - dz);
        prop_assert!(engine.compute_divider(&start, &end).is_none());
    }

    #[test]
    fn long_spans_are_kept_exactly(a in -265.0f64..265.0, b in -265.0f64..265.0, z in -165.0f64..165.0) {
        prop_assume!((a - b).abs() >= 40.0);
        let engine = engine_for("b-600-400-200");
        let draft = engine
            .compute_divider(&SnapPoint::new(a, z), &SnapPoint::new(b, z))
            .unwrap();
        prop_assert_eq!(draft.axis, Axis::X);
        prop_assert_eq!(draft.length, (b - a).abs());
        prop_assert_eq!(draft.offset_along_axis, (b + a) / 2.0);
        prop_assert_eq!(draft.position, z);
    }

    #[test]
    fn short_spans_fall_back_to_full_width(x in -265.0f64..265.0, z in -165.0f64..165.0, dz in 0.01f64..39.99) {
        let engine = engine_for("b-600-400-200");
        let ghost = engine
            .resolve(&SnapPoint::new(x, z), &SnapPoint::new(x, z + dz))
            .unwrap();
        prop_assert!(ghost.fallback);
        prop_assert_eq!(ghost.draft.length, 330.0);
        prop_assert_eq!(ghost.draft.offset_along_axis, 0.0);
    }
}
