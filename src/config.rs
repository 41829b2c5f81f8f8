// Tunables for the spatial index and the narrow phase, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Quadtree subdivision limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadtreeConfig {
    /// Nodes at this depth never subdivide (root is depth 0).
    pub max_depth: u32,
    /// A leaf below `max_depth` splits when an insert would exceed this count.
    pub max_rects_per_leaf: usize,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_rects_per_leaf: 16,
        }
    }
}

/// Narrow-phase options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SatConfig {
    /// Also test the axis from the circle center to the nearest polygon vertex
    /// in circle-vs-polygon checks. Off by default, which misses separation
    /// near polygon corners.
    pub circle_vertex_axis: bool,
}

/// Uniform grid options, only read by `SpatialGrid`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 64.0 }
    }
}

/// Complete configuration for a `CollisionWorld`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    pub quadtree: QuadtreeConfig,
    pub sat: SatConfig,
    pub grid: GridConfig,
}

impl CollisionConfig {
    /// Parses and validates a TOML document. Missing sections keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: CollisionConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML configuration file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quadtree.max_rects_per_leaf == 0 {
            return Err(ConfigError::Invalid("quadtree.max_rects_per_leaf must be positive".into()));
        }
        if !(self.grid.cell_size.is_finite() && self.grid.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid.cell_size must be a positive number, got {}",
                self.grid.cell_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = CollisionConfig::default();
        assert_eq!(config.quadtree.max_depth, 8);
        assert_eq!(config.quadtree.max_rects_per_leaf, 16);
        assert!(!config.sat.circle_vertex_axis);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CollisionConfig::from_toml_str(
            r#"
            [quadtree]
            max_rects_per_leaf = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.quadtree.max_rects_per_leaf, 2);
        assert_eq!(config.quadtree.max_depth, 8);
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(CollisionConfig::from_toml_str("").unwrap(), CollisionConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CollisionConfig::default();
        config.sat.circle_vertex_axis = true;
        config.grid.cell_size = 12.5;
        let text = config.to_toml_string().unwrap();
        assert_eq!(CollisionConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = CollisionConfig::from_toml_str("[quadtree]\nmax_rects_per_leaf = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = CollisionConfig::from_toml_str("[grid]\ncell_size = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = CollisionConfig::from_toml_str("[quadtree\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CollisionConfig::load_from_file("/nonexistent/collision2d.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
