//! End-to-end configurator sessions as a host would drive them.

use basketkit_core::{
    Axis, Catalog, CatalogError, ConfiguratorEvent, ConfiguratorListener, PlacementMode,
    ResizeHandle, SnapPoint,
};
use basketkit_layout::{ConfigurationSnapshot, Configurator};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct EventLog(Rc<RefCell<Vec<ConfiguratorEvent>>>);

impl EventLog {
    fn take(&self) -> Vec<ConfiguratorEvent> {
        self.0.borrow_mut().drain(..).collect()
    }
}

impl ConfiguratorListener for EventLog {
    fn on_event(&mut self, event: &ConfiguratorEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

fn session() -> (Configurator, EventLog) {
    let mut configurator = Configurator::new(Catalog::builtin()).unwrap();
    let log = EventLog::default();
    configurator.add_listener(Box::new(log.clone()));
    configurator.set_placement_mode(Some(PlacementMode::Divider));
    log.take();
    (configurator, log)
}

fn top_edge(x: f64) -> SnapPoint {
    SnapPoint::with_side(x, 165.0, Axis::Z)
}

#[test]
fn test_place_with_clicks() {
    let (mut configurator, log) = session();

    configurator.click_start(top_edge(-203.0));
    assert_eq!(configurator.end_snaps().len(), 12);
    configurator.hover_end(Some(SnapPoint::new(-203.0, -135.0)));
    let ghost = configurator.ghost().unwrap();
    assert!(!ghost.fallback);

    let placed = configurator
        .click_end(SnapPoint::new(-203.0, -135.0))
        .unwrap();
    assert_eq!(placed.length, 300.0);
    assert_eq!(placed.offset_along_axis, 15.0);
    assert_eq!(configurator.dividers().len(), 1);
    assert!(configurator.selected_start().is_none());
    assert!(configurator.ghost().is_none());

    assert_eq!(log.take(), vec![ConfiguratorEvent::DividerPlaced(placed)]);
}

#[test]
fn test_clicks_ignored_outside_divider_mode() {
    let (mut configurator, log) = session();
    configurator.set_placement_mode(None);
    assert_eq!(
        log.take(),
        vec![ConfiguratorEvent::PlacementModeChanged(None)]
    );

    assert!(configurator
        .request_place(top_edge(-203.0), SnapPoint::new(-203.0, -135.0))
        .is_none());
    assert!(configurator.dividers().is_empty());
    assert!(log.take().is_empty());
}

#[test]
fn test_leaving_divider_mode_drops_the_gesture() {
    let (mut configurator, _log) = session();
    configurator.click_start(top_edge(-203.0));
    configurator.set_placement_mode(Some(PlacementMode::Remove));
    assert!(configurator.selected_start().is_none());
    assert!(configurator.end_snaps().is_empty());
}

#[test]
fn test_invalid_pair_is_silently_ignored() {
    let (mut configurator, log) = session();
    configurator.click_start(top_edge(-203.0));
    assert!(configurator.click_end(SnapPoint::new(0.0, 0.0)).is_none());
    assert!(configurator.dividers().is_empty());
    assert!(log.take().is_empty());
}

#[test]
fn test_placed_divider_contributes_start_points() {
    let (mut configurator, _log) = session();
    let before = configurator.start_snaps().len();

    configurator
        .request_place(top_edge(29.0), SnapPoint::new(29.0, -165.0))
        .unwrap();

    assert_eq!(configurator.start_snaps().len(), before + 12);
    let on_line = SnapPoint::new(29.0, 54.0);
    assert!(configurator.start_snaps().iter().any(|p| p.key() == on_line.key()));
}

#[test]
fn test_resize_flow_updates_store_and_emits_once_per_change() {
    let (mut configurator, log) = session();
    let placed = configurator
        .request_place(SnapPoint::with_side(-265.0, 0.0, Axis::X), SnapPoint::new(-29.0, 0.0))
        .unwrap();
    log.take();

    configurator.select_divider(placed.id);
    assert!(configurator.is_camera_locked());
    configurator.request_resize_begin(placed.id, ResizeHandle::End);

    let update = configurator.request_resize_sample(100.0).unwrap();
    assert!(configurator.request_resize_sample(100.0).is_none());
    configurator.request_resize_end();
    assert!(configurator.request_resize_sample(200.0).is_none());

    let stored = configurator.divider(placed.id).unwrap();
    assert_eq!(stored.length, update.length);
    assert_eq!(stored.offset_along_axis, update.offset_along_axis);
    // the start end did not move
    assert_eq!(stored.span_start(), placed.span_start());

    assert_eq!(
        log.take(),
        vec![
            ConfiguratorEvent::SelectionChanged(Some(placed.id)),
            ConfiguratorEvent::DividerUpdated(update),
        ]
    );
}

#[test]
fn test_remove_clears_selection_and_cancels_drag() {
    let (mut configurator, log) = session();
    let placed = configurator.place_divider_at(Axis::Z, 29.0, None, None);
    assert_eq!(placed.length, 330.0);
    configurator.select_divider(placed.id);
    configurator.request_resize_begin(placed.id, ResizeHandle::Start);
    log.take();

    configurator.set_placement_mode(Some(PlacementMode::Remove));
    assert!(configurator.request_remove(placed.id));

    assert!(configurator.dividers().is_empty());
    assert_eq!(configurator.selected_divider(), None);
    assert!(!configurator.is_resizing());
    assert_eq!(
        log.take(),
        vec![
            ConfiguratorEvent::PlacementModeChanged(Some(PlacementMode::Remove)),
            ConfiguratorEvent::SelectionChanged(None),
            ConfiguratorEvent::DividerRemoved(placed.id),
        ]
    );

    assert!(!configurator.request_remove(placed.id));
    assert!(log.take().is_empty());
}

#[test]
fn test_basket_swap_clears_everything() {
    let (mut configurator, log) = session();
    let placed = configurator.place_divider_at(Axis::X, 0.0, Some(200.0), Some(50.0));
    configurator.request_resize_begin(placed.id, ResizeHandle::End);
    configurator.click_start(top_edge(-203.0));
    log.take();

    configurator.select_basket("b-600-400-100").unwrap();

    assert_eq!(configurator.basket().id, "b-600-400-100");
    assert!(configurator.dividers().is_empty());
    assert!(configurator.selected_start().is_none());
    assert!(!configurator.is_resizing());
    assert_eq!(configurator.placement_mode(), None);
    assert_eq!(
        log.take(),
        vec![
            ConfiguratorEvent::PlacementModeChanged(None),
            ConfiguratorEvent::BasketSelected("b-600-400-100".to_string()),
        ]
    );

    let placed = configurator.place_divider_at(Axis::X, 0.0, None, None);
    assert_eq!(placed.height, 100.0);
}

#[test]
fn test_unknown_basket_is_an_error() {
    let (mut configurator, _log) = session();
    assert_eq!(
        configurator.select_basket("b-1-2-3"),
        Err(CatalogError::UnknownBasket("b-1-2-3".to_string()))
    );
    assert_eq!(configurator.basket().id, "b-600-400-200");
}

#[test]
fn test_reset_keeps_basket() {
    let (mut configurator, log) = session();
    configurator.place_divider_at(Axis::Z, 29.0, None, None);
    log.take();

    configurator.reset();
    assert!(configurator.dividers().is_empty());
    assert_eq!(configurator.placement_mode(), None);
    assert_eq!(configurator.basket().id, "b-600-400-200");
    assert_eq!(log.take(), vec![ConfiguratorEvent::Reset]);
}

#[test]
fn test_snapshot_json() {
    let (mut configurator, _log) = session();
    configurator.place_divider_at(Axis::X, 54.0, Some(232.0), Some(-116.0));

    let json = configurator.snapshot().to_json().unwrap();
    assert!(json.contains("\"basketId\": \"b-600-400-200\""));
    assert!(json.contains("\"offsetAlongAxis\": -116.0"));

    let restored = ConfigurationSnapshot::from_json(&json).unwrap();
    assert_eq!(restored, configurator.snapshot());
}

#[test]
fn test_diagnostics() {
    let (configurator, _log) = session();
    let bar = configurator.nearest_bar(Axis::X, -230.0, 100.0).unwrap();
    assert_eq!(bar.id.to_string(), "NL1");
    let tile = configurator.floor_tile_at(-233.0, -127.0).unwrap();
    assert_eq!(tile.id, "SL1-WS1");
}

#[test]
fn test_selection_survives_other_dividers_changing() {
    let (mut configurator, log) = session();
    let a = configurator.place_divider_at(Axis::Z, -203.0, None, None);
    configurator.select_divider(a.id);
    log.take();

    let b = configurator
        .request_place(top_edge(29.0), SnapPoint::new(29.0, -135.0))
        .unwrap();
    assert_eq!(configurator.selected_divider(), Some(a.id));
    assert!(configurator.is_camera_locked());

    assert!(configurator.request_remove(b.id));
    assert_eq!(configurator.selected_divider(), Some(a.id));
    assert!(configurator.is_camera_locked());

    assert_eq!(
        log.take(),
        vec![
            ConfiguratorEvent::DividerPlaced(b.clone()),
            ConfiguratorEvent::DividerRemoved(b.id),
        ]
    );
}

#[test]
fn test_deselect_all_leaves_placement_mode() {
    let (mut configurator, log) = session();
    let placed = configurator.place_divider_at(Axis::X, 54.0, None, None);
    configurator.select_divider(placed.id);
    configurator.click_start(top_edge(-203.0));
    log.take();

    configurator.deselect_all();

    assert_eq!(configurator.selected_divider(), None);
    assert_eq!(configurator.placement_mode(), None);
    assert!(configurator.selected_start().is_none());
    assert_eq!(
        log.take(),
        vec![
            ConfiguratorEvent::SelectionChanged(None),
            ConfiguratorEvent::PlacementModeChanged(None),
        ]
    );
}

#[test]
fn test_direct_placement_keeps_minimum_length() {
    let (mut configurator, _log) = session();

    let zero = configurator.place_divider_at(Axis::X, 54.0, Some(0.0), Some(30.0));
    assert_eq!(zero.length, 530.0);
    assert_eq!(zero.offset_along_axis, 0.0);

    let short = configurator.place_divider_at(Axis::Z, 29.0, Some(20.0), Some(10.0));
    assert_eq!(short.length, 330.0);
    assert_eq!(short.offset_along_axis, 0.0);

    let minimum = configurator.place_divider_at(Axis::Z, 58.0, Some(40.0), Some(10.0));
    assert_eq!(minimum.length, 40.0);
    assert_eq!(minimum.offset_along_axis, 10.0);
}
