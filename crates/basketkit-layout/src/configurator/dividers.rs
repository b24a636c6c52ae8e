//! Divider selection, resize drags and removal.

use super::Configurator;
use basketkit_core::{ConfiguratorEvent, DividerId, DividerUpdate, ResizeHandle};
use tracing::{info, warn};

impl Configurator {
    /// Selects a placed divider. Unknown ids are ignored.
    pub fn select_divider(&mut self, id: DividerId) {
        if !self.store.contains(id) {
            warn!("Cannot select unknown divider {}", id);
            return;
        }
        if self.selected != Some(id) {
            self.selected = Some(id);
            self.emit(ConfiguratorEvent::SelectionChanged(Some(id)));
        }
    }

    /// Clears the divider selection and leaves any placement mode.
    pub fn deselect_all(&mut self) {
        self.clear_selected();
        self.set_placement_mode(None);
    }

    /// Begins dragging one end of a divider.
    pub fn request_resize_begin(&mut self, id: DividerId, handle: ResizeHandle) {
        match self.store.get(id) {
            Some(divider) => self.resize.begin(divider, handle),
            None => warn!("Cannot resize unknown divider {}", id),
        }
    }

    /// Feeds one pointer coordinate of the drag. Returns the applied update,
    /// if the span changed.
    pub fn request_resize_sample(&mut self, pointer: f64) -> Option<DividerUpdate> {
        let id = self.resize.active_divider()?;
        let Some(current) = self.store.get(id) else {
            warn!("Dragged divider {} no longer exists", id);
            self.resize.cancel();
            return None;
        };

        let update = self
            .resize
            .sample(pointer, self.state.engine.grid(), current)?;
        self.store.apply(&update);
        self.emit(ConfiguratorEvent::DividerUpdated(update));
        Some(update)
    }

    /// Ends the drag, whether or not any update was emitted.
    pub fn request_resize_end(&mut self) {
        self.resize.end();
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_active()
    }

    /// Removes a divider, clearing the selection if it was the selected one.
    /// Unknown ids are ignored.
    pub fn request_remove(&mut self, id: DividerId) -> bool {
        if self.store.remove(id).is_none() {
            warn!("Cannot remove unknown divider {}", id);
            return false;
        }
        if self.resize.active_divider() == Some(id) {
            self.resize.cancel();
        }
        if self.selected == Some(id) {
            self.clear_selected();
        }
        self.after_divider_set_changed();
        info!("Divider removed: {}", id);
        self.emit(ConfiguratorEvent::DividerRemoved(id));
        true
    }
}
