//! Placement mode, start/end clicks and the ghost preview.

use super::Configurator;
use crate::placement::GhostDivider;
use basketkit_core::{
    Axis, ConfiguratorEvent, Divider, DividerDraft, PlacementMode, SnapPoint, MIN_DIVIDER_LENGTH,
};
use tracing::{debug, info, warn};

impl Configurator {
    /// Changes the interaction mode. Leaving divider mode drops the
    /// placement gesture.
    pub fn set_placement_mode(&mut self, mode: Option<PlacementMode>) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        if mode != Some(PlacementMode::Divider) {
            self.state.engine.clear_selection();
        }
        self.emit(ConfiguratorEvent::PlacementModeChanged(mode));
    }

    fn placing(&self) -> bool {
        self.mode == Some(PlacementMode::Divider)
    }

    pub fn click_start(&mut self, snap: SnapPoint) {
        if !self.placing() {
            debug!("Start click ignored outside divider mode");
            return;
        }
        self.state.engine.handle_start_click(snap);
    }

    pub fn hover_end(&mut self, snap: Option<SnapPoint>) {
        if !self.placing() {
            return;
        }
        self.state.engine.set_hovered_end(snap);
    }

    /// Confirms the gesture at `snap`. Returns the placed divider, or `None`
    /// when there was no start or the pair was not colinear.
    pub fn click_end(&mut self, snap: SnapPoint) -> Option<Divider> {
        if !self.placing() {
            debug!("End click ignored outside divider mode");
            return None;
        }
        if self.state.engine.selected_start().is_none() {
            return None;
        }
        match self.state.engine.handle_end_click(snap) {
            Some(draft) => Some(self.place(draft)),
            None => {
                warn!("Ignoring end point ({}, {}): not colinear with start", snap.x, snap.z);
                None
            }
        }
    }

    /// Start click followed by end click.
    pub fn request_place(&mut self, start: SnapPoint, end: SnapPoint) -> Option<Divider> {
        self.click_start(start);
        self.click_end(end)
    }

    /// Places a divider directly from its fields.
    ///
    /// A missing length, or any length below [`MIN_DIVIDER_LENGTH`] (zero
    /// included), becomes the full floor span on `axis` centred on the
    /// basket, so a stored divider is never shorter than the minimum.
    pub fn place_divider_at(
        &mut self,
        axis: Axis,
        position: f64,
        length: Option<f64>,
        offset_along_axis: Option<f64>,
    ) -> Divider {
        let floor = &self.state.basket.spec.dimensions.internal_bottom;
        let full = match axis {
            Axis::X => floor.length,
            Axis::Z => floor.width,
        };
        let (length, offset_along_axis) = match length {
            Some(length) if length >= MIN_DIVIDER_LENGTH => {
                (length, offset_along_axis.unwrap_or(0.0))
            }
            _ => (full, 0.0),
        };
        self.place(DividerDraft {
            axis,
            position,
            length,
            height: self.state.basket.divider_height(),
            offset_along_axis,
        })
    }

    fn place(&mut self, draft: DividerDraft) -> Divider {
        let divider = self.store.insert(draft).clone();
        self.after_divider_set_changed();
        info!(
            "Divider placed: {} axis {} at {} length {}",
            divider.id, divider.axis, divider.position, divider.length
        );
        self.emit(ConfiguratorEvent::DividerPlaced(divider.clone()));
        divider
    }

    /// Start markers for the current divider set.
    pub fn start_snaps(&self) -> &[SnapPoint] {
        self.state.engine.start_snaps()
    }

    /// End markers for the selected start.
    pub fn end_snaps(&self) -> Vec<SnapPoint> {
        self.state.engine.end_snaps()
    }

    pub fn selected_start(&self) -> Option<SnapPoint> {
        self.state.engine.selected_start()
    }

    pub fn hovered_end(&self) -> Option<SnapPoint> {
        self.state.engine.hovered_end()
    }

    pub fn ghost(&self) -> Option<GhostDivider> {
        self.state.engine.preview()
    }
}
