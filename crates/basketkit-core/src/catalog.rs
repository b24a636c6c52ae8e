//! Basket catalog and catalog file handling
//!
//! The catalog is the set of basket types a user can choose from. A builtin
//! catalog ships with the stock 600×400 baskets; hosts may load their own
//! from a JSON or TOML file.

use crate::basket::{
    BasketSize, BasketSpec, BasketType, Dimensions, Envelope, FloorGridSpec, HoleSpec, Outline,
    PlacementConfig, RimSpec, StartSnapConfig, TrackSpec, VerticalSpec,
};
use crate::error::{CatalogError, ConfigError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Specification shared by the stock 600×400 baskets.
pub fn stock_spec() -> BasketSpec {
    BasketSpec {
        dimensions: Dimensions {
            external: Envelope {
                length: 600.0,
                width: 400.0,
                height: 100.0,
            },
            internal_top: Outline {
                length: 545.0,
                width: 345.0,
            },
            internal_bottom: Outline {
                length: 530.0,
                width: 330.0,
            },
        },
        holes: HoleSpec {
            long_side: TrackSpec {
                cols: 18,
                gap: 19.0,
                bar: 10.0,
                margin_bottom: 9.0,
                margin_top: 16.0,
            },
            short_side: TrackSpec {
                cols: 12,
                gap: 15.0,
                bar: 12.0,
                margin_bottom: 9.0,
                margin_top: 16.0,
            },
            vertical: VerticalSpec {
                bottom_hole_height: 37.0,
                rail_height: 22.0,
                top_hole_height: 40.0,
            },
            grid: FloorGridSpec {
                gap: 16.0,
                rib: 12.0,
                offset_x: 24.0,
                offset_z: 30.0,
            },
        },
        rim: RimSpec { width: 16.0 },
        placement: PlacementConfig {
            start_snaps: StartSnapConfig {
                exclude_corners: Some(true),
                ..StartSnapConfig::default()
            },
        },
    }
}

fn stock_basket(height: f64) -> BasketType {
    let mut spec = stock_spec();
    spec.dimensions.external.height = height;
    BasketType {
        id: format!("b-600-400-{}", height),
        name: format!("600×400×{}", height),
        size: BasketSize {
            width: 600.0,
            depth: 400.0,
            height,
        },
        spec,
    }
}

/// Ordered collection of selectable baskets with unique ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    baskets: Vec<BasketType>,
}

impl Catalog {
    /// Builds a catalog, validating every basket and rejecting duplicate ids.
    pub fn new(baskets: Vec<BasketType>) -> Result<Self, ConfigError> {
        let catalog = Self { baskets };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The stock baskets: 600×400×200 and 600×400×100.
    pub fn builtin() -> Self {
        Self {
            baskets: vec![stock_basket(200.0), stock_basket(100.0)],
        }
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let catalog: Self = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a catalog from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let catalog: Self = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load catalog from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = CatalogFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let catalog = match format {
            CatalogFormat::Json => Self::from_json_str(&content)?,
            CatalogFormat::Toml => Self::from_toml_str(&content)?,
        };

        tracing::info!(
            "Loaded {} baskets from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Save catalog to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        let content = match CatalogFormat::from_path(path)? {
            CatalogFormat::Json => serde_json::to_string_pretty(self)?,
            CatalogFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates every basket and checks id uniqueness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baskets.is_empty() {
            return Err(CatalogError::EmptyCatalog.into());
        }

        let mut seen = HashSet::new();
        for basket in &self.baskets {
            if !seen.insert(basket.id.as_str()) {
                return Err(CatalogError::DuplicateBasket(basket.id.clone()).into());
            }
            basket.validate()?;
        }
        Ok(())
    }

    /// Looks up a basket by id.
    pub fn get(&self, id: &str) -> Result<&BasketType, CatalogError> {
        self.baskets
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| CatalogError::UnknownBasket(id.to_string()))
    }

    /// The basket a fresh session starts with.
    pub fn default_basket(&self) -> Option<&BasketType> {
        self.baskets.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BasketType> {
        self.baskets.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.baskets.iter().map(|b| b.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.baskets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baskets.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.ids(), vec!["b-600-400-200", "b-600-400-100"]);
        assert_eq!(catalog.get("b-600-400-100").unwrap().divider_height(), 100.0);
    }

    #[test]
    fn test_unknown_basket() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.get("nope"),
            Err(CatalogError::UnknownBasket("nope".to_string()))
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let basket = stock_basket(200.0);
        let result = Catalog::new(vec![basket.clone(), basket]);
        assert!(matches!(
            result,
            Err(ConfigError::Catalog(CatalogError::DuplicateBasket(_)))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Catalog::new(Vec::new()),
            Err(ConfigError::Catalog(CatalogError::EmptyCatalog))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = Catalog::load_from_file(Path::new("baskets.yaml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(ext)) if ext == "yaml"));
    }
}
