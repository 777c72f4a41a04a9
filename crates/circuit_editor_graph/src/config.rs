// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor configuration.
//!
//! Stored as RON. Every field has a default, so a config file only needs to
//! name the values it overrides:
//!
//! ```ron
//! (
//!     default_canvas: (width: 1600.0, height: 900.0),
//!     label_prefix: "Gate",
//! )
//! ```

use crate::geometry::Extent;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas extent used for placement when no live viewport size is known
pub const DEFAULT_CANVAS: Extent = Extent::new(1200.0, 800.0);

/// Size of newly added components
pub const DEFAULT_COMPONENT_SIZE: Extent = Extent::new(120.0, 80.0);

/// Label prefix of newly added components
pub const DEFAULT_LABEL_PREFIX: &str = "Component";

/// Errors loading or saving a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// RON text could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Configuration could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas extent used when the host has not reported a viewport size
    pub default_canvas: Extent,
    /// Size of newly added components
    pub component_size: Extent,
    /// Prefix of auto-numbered component labels
    pub label_prefix: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_canvas: DEFAULT_CANVAS,
            component_size: DEFAULT_COMPONENT_SIZE,
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a configuration from RON text
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Load from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_ron(&content)?;
        tracing::info!("Loaded editor config from {:?}", path);
        Ok(config)
    }

    /// Save to a RON file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_ron()?)?;
        tracing::info!("Saved editor config to {:?}", path);
        Ok(())
    }

    /// Check that all extents are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_canvas.is_positive() {
            return Err(ConfigError::Invalid(format!(
                "default_canvas must be positive, got {:?}",
                self.default_canvas
            )));
        }
        if !self.component_size.is_positive() {
            return Err(ConfigError::Invalid(format!(
                "component_size must be positive, got {:?}",
                self.component_size
            )));
        }
        Ok(())
    }

    /// Label for the `n`th component (1-based)
    pub fn component_label(&self, n: usize) -> String {
        format!("{} {}", self.label_prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.default_canvas, Extent::new(1200.0, 800.0));
        assert_eq!(config.component_size, Extent::new(120.0, 80.0));
        assert_eq!(config.component_label(3), "Component 3");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_ron() {
        let config = EditorConfig::from_ron(r#"(label_prefix: "Gate")"#).unwrap();
        assert_eq!(config.label_prefix, "Gate");
        assert_eq!(config.component_size, DEFAULT_COMPONENT_SIZE);
    }

    #[test]
    fn test_serialization() {
        let config = EditorConfig {
            default_canvas: Extent::new(1600.0, 900.0),
            ..EditorConfig::default()
        };
        let ron_str = config.to_ron().unwrap();
        let loaded = EditorConfig::from_ron(&ron_str).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_rejects_empty_component_size() {
        let result = EditorConfig::from_ron("(component_size: (width: 0.0, height: 80.0))");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = EditorConfig::from_ron("(default_canvas: nope)");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("circuit-editor-{}.ron", uuid::Uuid::new_v4()));
        let config = EditorConfig {
            label_prefix: "Block".to_string(),
            ..EditorConfig::default()
        };

        config.save(&path).unwrap();
        let loaded = EditorConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
