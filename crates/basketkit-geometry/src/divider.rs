//! Divider solids and resize-handle anchors.

use crate::shapes::Box3;
use crate::FLOOR_THICKNESS;
use basketkit_core::{Axis, Divider, ResizeHandle};
use glam::DVec3;
use serde::{Deserialize, Serialize};

pub const DIVIDER_THICKNESS: f64 = 4.0;
/// Body is this much shorter than the divider span; the caps fill the ends.
pub const END_CLEARANCE: f64 = 12.0;
/// Divider walls stop this far below their nominal height.
pub const HEIGHT_CLEARANCE: f64 = 5.0;
pub const CAP_DEPTH: f64 = 4.0;
/// Hit-test cube around each handle
pub const HANDLE_HIT_SIZE: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleAnchor {
    pub handle: ResizeHandle,
    pub position: DVec3,
    pub grip: Box3,
    pub hit_box: Box3,
}

/// Renderable description of one divider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividerSolid {
    pub axis: Axis,
    pub body: Box3,
    pub caps: [Box3; 2],
    pub handles: [HandleAnchor; 2],
}

/// Maps a size given as (along axis, height, across) into x/y/z.
fn oriented(axis: Axis, along: f64, height: f64, across: f64) -> DVec3 {
    match axis {
        Axis::X => DVec3::new(along, height, across),
        Axis::Z => DVec3::new(across, height, along),
    }
}

impl DividerSolid {
    pub fn from_divider(divider: &Divider) -> Self {
        let axis = divider.axis;
        let effective_height = (divider.height - HEIGHT_CLEARANCE).max(0.0);
        let body_length = (divider.length - END_CLEARANCE).max(0.0);
        let half = divider.length / 2.0;

        let center = oriented(
            axis,
            divider.offset_along_axis,
            effective_height / 2.0 + FLOOR_THICKNESS,
            divider.position,
        );
        let body = Box3::new(
            center,
            oriented(axis, body_length, effective_height, DIVIDER_THICKNESS),
        );

        let cap_size = oriented(
            axis,
            CAP_DEPTH,
            (effective_height - 4.0).max(0.0),
            DIVIDER_THICKNESS + 2.0,
        );
        let cap = |dir: f64| {
            Box3::new(
                center + oriented(axis, dir * (half - CAP_DEPTH / 2.0), 0.0, 0.0),
                cap_size,
            )
        };

        let grip_size = oriented(axis, 8.0, 16.0, 16.0);
        let anchor = |handle: ResizeHandle, dir: f64| {
            let position = center + oriented(axis, dir * half, 0.0, 0.0);
            HandleAnchor {
                handle,
                position,
                grip: Box3::new(position, grip_size),
                hit_box: Box3::new(position, DVec3::splat(HANDLE_HIT_SIZE)),
            }
        };

        Self {
            axis,
            body,
            caps: [cap(-1.0), cap(1.0)],
            handles: [
                anchor(ResizeHandle::Start, -1.0),
                anchor(ResizeHandle::End, 1.0),
            ],
        }
    }

    pub fn handle(&self, handle: ResizeHandle) -> &HandleAnchor {
        match handle {
            ResizeHandle::Start => &self.handles[0],
            ResizeHandle::End => &self.handles[1],
        }
    }

    /// Handle whose hit box contains `point`, preferring the closer anchor.
    pub fn hit_handle(&self, point: DVec3) -> Option<ResizeHandle> {
        self.handles
            .iter()
            .filter(|h| h.hit_box.contains(point))
            .min_by(|a, b| {
                a.position
                    .distance_squared(point)
                    .total_cmp(&b.position.distance_squared(point))
            })
            .map(|h| h.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basketkit_core::{DividerDraft, DividerId};

    fn divider(axis: Axis, length: f64) -> Divider {
        DividerDraft {
            axis,
            position: 54.0,
            length,
            height: 200.0,
            offset_along_axis: -20.0,
        }
        .into_divider(DividerId::new())
    }

    #[test]
    fn test_body_dimensions_along_x() {
        let solid = DividerSolid::from_divider(&divider(Axis::X, 300.0));
        assert_eq!(solid.body.size, DVec3::new(288.0, 195.0, 4.0));
        assert_eq!(solid.body.center, DVec3::new(-20.0, 99.0, 54.0));
    }

    #[test]
    fn test_handles_at_span_ends() {
        let solid = DividerSolid::from_divider(&divider(Axis::Z, 300.0));
        assert_eq!(solid.handle(ResizeHandle::Start).position.z, -170.0);
        assert_eq!(solid.handle(ResizeHandle::End).position.z, 130.0);
        assert_eq!(solid.handle(ResizeHandle::End).position.x, 54.0);
    }

    #[test]
    fn test_short_divider_body_never_negative() {
        let solid = DividerSolid::from_divider(&divider(Axis::X, 10.0));
        assert_eq!(solid.body.size.x, 0.0);
    }

    #[test]
    fn test_hit_handle() {
        let solid = DividerSolid::from_divider(&divider(Axis::X, 300.0));
        let end = solid.handle(ResizeHandle::End).position;
        assert_eq!(
            solid.hit_handle(end + DVec3::new(5.0, 0.0, 0.0)),
            Some(ResizeHandle::End)
        );
        assert_eq!(solid.hit_handle(solid.body.center), None);
    }
}
