//! Divider records.
//!
//! A divider is a straight partition standing on the basket floor. Its
//! `position` is the fixed coordinate on the cross axis; `length` and
//! `offset_along_axis` describe the span along its own axis.

use crate::types::{coords_eq, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a placed divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DividerId(Uuid);

impl DividerId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DividerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DividerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "div-{}", self.0)
    }
}

/// Which end of a divider is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    /// The end with the lower coordinate along the divider axis
    Start,
    /// The end with the higher coordinate along the divider axis
    End,
}

/// The geometric part of a divider, before it has been given an id.
///
/// Produced by the placement engine for previews and confirmed placements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerDraft {
    pub axis: Axis,
    pub position: f64,
    pub length: f64,
    pub height: f64,
    pub offset_along_axis: f64,
}

impl DividerDraft {
    /// Assigns an id, turning the draft into a placed divider.
    pub fn into_divider(self, id: DividerId) -> Divider {
        Divider {
            id,
            axis: self.axis,
            position: self.position,
            length: self.length,
            height: self.height,
            offset_along_axis: self.offset_along_axis,
        }
    }
}

/// A placed partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divider {
    pub id: DividerId,
    pub axis: Axis,
    /// Cross-axis coordinate: z for axis `x`, x for axis `z`
    pub position: f64,
    pub length: f64,
    pub height: f64,
    /// Centre along the divider's own axis; 0 is the basket centre
    #[serde(default)]
    pub offset_along_axis: f64,
}

impl Divider {
    /// Lower bound of the span along the divider axis.
    pub fn span_start(&self) -> f64 {
        self.offset_along_axis - self.length / 2.0
    }

    /// Upper bound of the span along the divider axis.
    pub fn span_end(&self) -> f64 {
        self.offset_along_axis + self.length / 2.0
    }

    /// Applies a span update produced by the resize controller.
    pub fn apply(&mut self, update: &DividerUpdate) {
        self.length = update.length;
        self.offset_along_axis = update.offset_along_axis;
    }

    /// True when `update` would leave this divider unchanged.
    pub fn matches_span(&self, length: f64, offset_along_axis: f64) -> bool {
        coords_eq(self.length, length) && coords_eq(self.offset_along_axis, offset_along_axis)
    }
}

/// New span for an existing divider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerUpdate {
    pub id: DividerId,
    pub length: f64,
    pub offset_along_axis: f64,
}
