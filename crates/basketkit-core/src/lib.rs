//! # Basketkit Core
//!
//! Core types and utilities for Basketkit.
//! Provides the data model shared by the placement engine, the geometry
//! builder and the host render layer:
//! - Basket specifications and the basket catalog
//! - Snap points, axes and coordinate tolerance helpers
//! - Divider records
//! - Configurator events and listeners
//! - Error types

pub mod basket;
pub mod catalog;
pub mod divider;
pub mod error;
pub mod events;
pub mod types;

pub use basket::{
    BasketSize, BasketSpec, BasketType, Dimensions, Envelope, FloorGridSpec, HoleSpec, Outline,
    PlacementConfig, RimSpec, StartSnapConfig, TrackSpec, VerticalSpec,
};
pub use catalog::{stock_spec, Catalog};
pub use divider::{Divider, DividerDraft, DividerId, DividerUpdate, ResizeHandle};
pub use error::{CatalogError, ConfigError, Error, Result, SpecError};
pub use events::{dispatch, ConfiguratorEvent, ConfiguratorListener, PlacementMode};
pub use types::{coords_eq, Axis, SnapKey, SnapPoint, COORD_EPSILON, MIN_DIVIDER_LENGTH};
