//! # Basketkit Layout
//!
//! Snap-grid placement for basket dividers. Derives the discrete attachment
//! points of a basket from its perforation layout and turns user gestures
//! into divider records.
//!
//! ## Components
//!
//! - **Hole grid**: coordinates along one wall track
//! - **Snap grid**: basket-wide x and z snap coordinates
//! - **Bar and tile ids**: stable names for perforation bars and floor holes
//! - **Snap map**: legal start points and their reachable end points, cached
//!   per basket and merged with the edges of placed dividers
//! - **Placement engine**: start/end selection, divider computation and the
//!   full-span fallback for short gestures
//! - **Resize controller**: snapped, clamped resizing of a placed divider
//! - **Configurator**: the session object hosts drive
//!
//! ## Architecture
//!
//! ```text
//! Configurator
//!   ├── PlacementEngine ── BasketSnapMap (merged) ── SnapMapCache (static)
//!   │                                    └── SnapGrid ── HoleGrid
//!   ├── ResizeController ── SnapGrid
//!   ├── DividerStore
//!   └── SideBarMaps / FloorTiles (diagnostics)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use basketkit_core::{Axis, Catalog, PlacementMode, SnapPoint};
//! use basketkit_layout::Configurator;
//!
//! let mut session = Configurator::new(Catalog::builtin()).unwrap();
//! session.set_placement_mode(Some(PlacementMode::Divider));
//!
//! let placed = session.request_place(
//!     SnapPoint::with_side(-203.0, 165.0, Axis::Z),
//!     SnapPoint::new(-203.0, -135.0),
//! );
//! assert_eq!(placed.map(|d| d.length), Some(300.0));
//! ```

pub mod bar_ids;
pub mod configurator;
pub mod divider_store;
pub mod floor_grid;
pub mod hole_grid;
pub mod placement;
pub mod resize;
pub mod snap_grid;
pub mod snap_map;

pub use bar_ids::{BarDescriptor, BarId, BarSide, BarSpan, SideBarMaps};
pub use configurator::{ConfigurationSnapshot, Configurator, ListenerHandle};
pub use divider_store::DividerStore;
pub use floor_grid::{FloorTile, FloorTiles, TileBounds};
pub use hole_grid::{build_hole_grid, HoleGrid, SideHoleGrids};
pub use placement::{GhostDivider, PlacementEngine};
pub use resize::{resize_span, ResizeController};
pub use snap_grid::{find_closest_snap, SnapGrid};
pub use snap_map::{build_snap_map, merge_divider_edges, BasketSnapMap, SnapMapCache};
