//! Error handling for Basketkit
//!
//! Provides error types for the configuration-level layers of the library:
//! - Catalog errors (basket lookup and registration)
//! - Spec errors (basket specification validation)
//! - Config errors (catalog file loading/saving)
//!
//! Interactive placement and resize operations never produce these errors.
//! Invalid gestures degrade to `None` or a logged no-op instead.

use std::io;
use thiserror::Error;

/// Errors related to the basket catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No basket with the requested id exists.
    #[error("Unknown basket: {0}")]
    UnknownBasket(String),

    /// Two baskets share the same id.
    #[error("Duplicate basket id: {0}")]
    DuplicateBasket(String),

    /// The catalog holds no baskets at all.
    #[error("Catalog contains no baskets")]
    EmptyCatalog,
}

/// Errors raised while validating a basket specification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    /// A perforation track has an unusable layout.
    #[error("Invalid {track} track: {reason}")]
    InvalidTrack {
        /// Track name (`longSide` or `shortSide`).
        track: String,
        /// Why the track was rejected.
        reason: String,
    },

    /// A dimension is zero, negative or not finite.
    #[error("Invalid dimension '{name}': {value}")]
    InvalidDimension {
        /// Dimension name.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// Internal-bottom, internal-top and external outlines do not nest.
    #[error("Nesting violation: {0}")]
    NestingViolation(String),

    /// The floor perforation grid is unusable.
    #[error("Invalid floor grid: {0}")]
    InvalidFloorGrid(String),
}

/// Errors related to loading and saving catalog files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file extension is not `.json` or `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// A basket in the file failed validation.
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    /// The catalog in the file is inconsistent.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Main error type for Basketkit
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Spec validation error
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON export error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Basketkit operations
pub type Result<T> = std::result::Result<T, Error>;
