//! Outbound configurator events
//!
//! Provides:
//! - Event types describing every mutation of a configurator session
//! - The listener trait the render/UI layer implements to receive them
//!
//! Events are delivered synchronously, in mutation order, on the caller's
//! thread. There is no buffering.

use crate::divider::{Divider, DividerId, DividerUpdate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interaction mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    /// Start/end clicks place new dividers
    Divider,
    /// Clicking a divider removes it
    Remove,
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Divider => write!(f, "divider"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Configurator event types
#[derive(Debug, Clone, PartialEq)]
pub enum ConfiguratorEvent {
    /// A basket was selected; all dividers were cleared
    BasketSelected(String),
    /// A divider was placed
    DividerPlaced(Divider),
    /// A divider span changed during a resize drag
    DividerUpdated(DividerUpdate),
    /// A divider was removed
    DividerRemoved(DividerId),
    /// The selected divider changed
    SelectionChanged(Option<DividerId>),
    /// The placement mode changed
    PlacementModeChanged(Option<PlacementMode>),
    /// Dividers and selection were cleared, basket kept
    Reset,
}

impl fmt::Display for ConfiguratorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BasketSelected(id) => write!(f, "Basket selected: {}", id),
            Self::DividerPlaced(divider) => write!(
                f,
                "Divider placed: {} axis {} at {} ({} mm)",
                divider.id, divider.axis, divider.position, divider.length
            ),
            Self::DividerUpdated(update) => write!(
                f,
                "Divider updated: {} length {} offset {}",
                update.id, update.length, update.offset_along_axis
            ),
            Self::DividerRemoved(id) => write!(f, "Divider removed: {}", id),
            Self::SelectionChanged(Some(id)) => write!(f, "Selected: {}", id),
            Self::SelectionChanged(None) => write!(f, "Selection cleared"),
            Self::PlacementModeChanged(Some(mode)) => write!(f, "Mode: {}", mode),
            Self::PlacementModeChanged(None) => write!(f, "Mode: none"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

/// Listener trait for configurator events
///
/// Implement this trait to receive notifications of session changes.
/// Every method has an empty default so implementors only override
/// what they render.
pub trait ConfiguratorListener {
    /// Called for every event, before the specific callback
    fn on_event(&mut self, _event: &ConfiguratorEvent) {}

    /// Called when a divider is placed
    fn on_divider_placed(&mut self, _divider: &Divider) {}

    /// Called when a divider span changes
    fn on_divider_updated(&mut self, _update: &DividerUpdate) {}

    /// Called when a divider is removed
    fn on_divider_removed(&mut self, _id: DividerId) {}
}

/// Routes an event to the generic and the specific listener callbacks.
pub fn dispatch(listener: &mut dyn ConfiguratorListener, event: &ConfiguratorEvent) {
    listener.on_event(event);
    match event {
        ConfiguratorEvent::DividerPlaced(divider) => listener.on_divider_placed(divider),
        ConfiguratorEvent::DividerUpdated(update) => listener.on_divider_updated(update),
        ConfiguratorEvent::DividerRemoved(id) => listener.on_divider_removed(*id),
        _ => {}
    }
}
