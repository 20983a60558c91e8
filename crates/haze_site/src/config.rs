//! Site configuration file handling (haze.toml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level site configuration (haze.toml)
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub effects: EffectsSection,
}

/// Site identity and metadata defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteSection {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_name() -> String {
    "Portfolio".to_string()
}

fn default_base_url() -> String {
    "https://example.com".to_string()
}

fn default_description() -> String {
    "Personal portfolio".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            base_url: default_base_url(),
            author: None,
            description: default_description(),
        }
    }
}

/// Effect tuning overrides
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EffectsSection {
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    #[serde(default = "default_shape_count")]
    pub shape_count: usize,
    #[serde(default = "default_trail_length")]
    pub trail_length: usize,
}

fn default_particle_count() -> usize {
    24
}

fn default_shape_count() -> usize {
    6
}

fn default_trail_length() -> usize {
    8
}

impl Default for EffectsSection {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            shape_count: default_shape_count(),
            trail_length: default_trail_length(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a haze.toml path
    ///
    /// A missing file is not an error; the defaults stand in.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = SiteConfig::load(Path::new("/nonexistent/haze.toml"));
        assert!(config.is_ok_and(|c| c.site.name == "Portfolio" && c.effects.particle_count == 24));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            [site]
            name = "Ada's work"

            [effects]
            particle_count = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.site.name, "Ada's work");
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.effects.particle_count, 40);
        assert_eq!(config.effects.trail_length, 8);
    }

    #[test]
    fn test_empty_toml_is_fully_defaulted() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.site.description, "Personal portfolio");
        assert_eq!(config.effects.shape_count, 6);
    }
}
