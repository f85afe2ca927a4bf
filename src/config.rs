//! Verifier configuration
//!
//! Loaded from YAML or JSON; every field has a default so an empty file is
//! a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Flat confidence reported for partial matches (percent)
pub const DEFAULT_PARTIAL_CONFIDENCE: f64 = 70.0;
/// Minimum share of agreeing positions for a similarity-based partial match
pub const DEFAULT_PARTIAL_SIMILARITY: f64 = 0.75;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("config YAML is invalid: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VerifierConfig {
    /// Confidence for a partial match, 0..=100
    pub partial_confidence: f64,
    /// Similarity threshold of the catalog identifier, 0..=1
    pub partial_similarity: f64,
    /// Catalog file replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            partial_confidence: DEFAULT_PARTIAL_CONFIDENCE,
            partial_similarity: DEFAULT_PARTIAL_SIMILARITY,
            catalog_path: None,
        }
    }
}

impl VerifierConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` is read as JSON, anything else as YAML
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |e| e.eq_ignore_ascii_case("json"));

        if is_json {
            let config: Self = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.partial_confidence) {
            return Err(ConfigError::Invalid(format!(
                "partial_confidence must be within 0..=100, got {}",
                self.partial_confidence
            )));
        }
        if !(0.0..=1.0).contains(&self.partial_similarity) {
            return Err(ConfigError::Invalid(format!(
                "partial_similarity must be within 0..=1, got {}",
                self.partial_similarity
            )));
        }
        Ok(())
    }
}
