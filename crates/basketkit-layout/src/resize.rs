//! Divider resize controller.
//!
//! A drag works on the snapshot taken when it begins. Every pointer sample
//! is snapped to the grid of the divider's axis and the moving end is clamped
//! so the span never drops below [`MIN_DIVIDER_LENGTH`].

use crate::snap_grid::{find_closest_snap, SnapGrid};
use basketkit_core::{Divider, DividerId, DividerUpdate, ResizeHandle, MIN_DIVIDER_LENGTH};
use tracing::debug;

/// Span of `original` after moving `handle` to `snapped`.
///
/// Returns `(length, offset_along_axis)`. When the clamp applies the length
/// is exactly [`MIN_DIVIDER_LENGTH`].
pub fn resize_span(original: &Divider, handle: ResizeHandle, snapped: f64) -> (f64, f64) {
    let fixed_start = original.span_start();
    let fixed_end = original.span_end();

    match handle {
        ResizeHandle::Start => {
            let limit = fixed_end - MIN_DIVIDER_LENGTH;
            if snapped >= limit {
                (MIN_DIVIDER_LENGTH, fixed_end - MIN_DIVIDER_LENGTH / 2.0)
            } else {
                let length = fixed_end - snapped;
                (length, snapped + length / 2.0)
            }
        }
        ResizeHandle::End => {
            let limit = fixed_start + MIN_DIVIDER_LENGTH;
            if snapped <= limit {
                (MIN_DIVIDER_LENGTH, fixed_start + MIN_DIVIDER_LENGTH / 2.0)
            } else {
                let length = snapped - fixed_start;
                (length, fixed_start + length / 2.0)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct ResizeSession {
    original: Divider,
    handle: ResizeHandle,
}

#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag, replacing any drag in progress.
    pub fn begin(&mut self, divider: &Divider, handle: ResizeHandle) {
        debug!("Resize begin: {} {:?}", divider.id, handle);
        self.session = Some(ResizeSession {
            original: divider.clone(),
            handle,
        });
    }

    /// Processes one pointer sample.
    ///
    /// `current` is the divider as stored now. Returns an update only when
    /// the snapped span differs from it.
    pub fn sample(
        &self,
        pointer: f64,
        grid: &SnapGrid,
        current: &Divider,
    ) -> Option<DividerUpdate> {
        let session = self.session.as_ref()?;
        if current.id != session.original.id {
            return None;
        }

        let snapped = find_closest_snap(pointer, grid.snaps(session.original.axis))?;
        let (length, offset_along_axis) = resize_span(&session.original, session.handle, snapped);

        if current.matches_span(length, offset_along_axis) {
            return None;
        }

        debug!(
            "Resize sample {} -> {}: length {} offset {}",
            pointer, snapped, length, offset_along_axis
        );
        Some(DividerUpdate {
            id: current.id,
            length,
            offset_along_axis,
        })
    }

    /// Ends the drag, returning the id of the divider that was being resized.
    pub fn end(&mut self) -> Option<DividerId> {
        self.session.take().map(|s| s.original.id)
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_divider(&self) -> Option<DividerId> {
        self.session.as_ref().map(|s| s.original.id)
    }

    pub fn handle(&self) -> Option<ResizeHandle> {
        self.session.as_ref().map(|s| s.handle)
    }

    /// Divider as it was when the drag began.
    pub fn original(&self) -> Option<&Divider> {
        self.session.as_ref().map(|s| &s.original)
    }
}
