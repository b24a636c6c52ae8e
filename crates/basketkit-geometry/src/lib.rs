//! # Basketkit Geometry
//!
//! Renderer-agnostic, procedural geometry of a perforated basket and of
//! placed dividers. Everything is derived from the basket specification;
//! the render layer turns these descriptions into meshes.
//!
//! Coordinates are millimetres: x along the basket length, y up, z along
//! the width, origin at the centre of the floor.

pub mod basket;
pub mod divider;
pub mod floor;
pub mod posts;
pub mod rim;
pub mod shapes;
pub mod wall;

pub use basket::BasketGeometry;
pub use divider::{DividerSolid, HandleAnchor};
pub use floor::FloorProfile;
pub use posts::{corner_posts, CornerPost};
pub use rim::RimProfile;
pub use shapes::{Box3, Rect2};
pub use wall::{hole_rows, HoleRow, Wall, WallProfile, WallSide};

pub const WALL_THICKNESS: f64 = 2.0;
pub const FLOOR_THICKNESS: f64 = 1.5;
pub const RIM_THICKNESS: f64 = 3.0;
pub const CORNER_RADIUS: f64 = 3.0;
