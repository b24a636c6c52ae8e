//! # Basketkit
//!
//! Snap-grid placement and divider geometry for perforated storage basket
//! configurators.
//!
//! This crate re-exports the workspace crates behind one façade:
//!
//! - [`model`]: basket specifications, catalog, dividers, events and errors
//! - [`layout`]: hole grids, snap maps, placement, resize and the
//!   [`Configurator`] session
//! - [`geometry`]: procedural wall, floor, rim and divider geometry
//!
//! ```
//! use basketkit::{Axis, Catalog, Configurator, PlacementMode, SnapPoint};
//!
//! let mut configurator = Configurator::new(Catalog::builtin()).unwrap();
//! configurator.set_placement_mode(Some(PlacementMode::Divider));
//! let divider = configurator
//!     .request_place(
//!         SnapPoint::with_side(-203.0, 165.0, Axis::Z),
//!         SnapPoint::new(-203.0, -135.0),
//!     )
//!     .unwrap();
//! assert_eq!(divider.length, 300.0);
//! ```

pub use basketkit_core as model;
pub use basketkit_geometry as geometry;
pub use basketkit_layout as layout;

pub use basketkit_core::{
    Axis, BasketSpec, BasketType, Catalog, CatalogError, ConfiguratorEvent, ConfiguratorListener,
    Divider, DividerDraft, DividerId, DividerUpdate, PlacementMode, ResizeHandle, SnapPoint,
};
pub use basketkit_geometry::{BasketGeometry, DividerSolid};
pub use basketkit_layout::{ConfigurationSnapshot, Configurator, SnapGrid};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging to stdout.
///
/// Directives are read from `RUST_LOG` on top of an `info` default. Calling this
/// more than once is harmless; later calls leave the first subscriber in
/// place.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already installed");
    }

    Ok(())
}
