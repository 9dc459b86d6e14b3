//! YAML configuration file support.
//!
//! Every stage of the matcher can be tuned from one YAML file. Missing
//! sections and fields fall back to their defaults, so an empty document
//! (apart from `version`) yields the stock engine.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "pantry search"
//!
//! canonical:
//!   version: 1
//!   lowercase: true
//!   trim: true
//!   normalize_unicode: false
//!   collapse_whitespace: false
//!   drop_empty: true
//!
//! semantic:
//!   provider: "stub"
//!   model_name: "stub-gaussian"
//!   dimension: 384
//!   normalize: false
//!   cache_capacity: 4096
//!
//! expansion:
//!   similarity_threshold: 0.8
//!   include_aliases: true
//!   use_parallel: false
//!
//! ranking:
//!   default_min_match_percentage: 50
//!   default_max_results: 20
//!
//! duplicate:
//!   max_title_distance: 3
//!   min_ingredient_overlap: 0.8
//!   use_parallel: false
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use canonical::CanonicalizeConfig;
use matcher::{DuplicateConfig, ExpansionConfig, MatchConfig, Matcher, RankingConfig};
use semantic::{EmbeddingProvider, SemanticConfig, build_provider};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the whole matching engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeMatchConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canonical: CanonicalizeConfig,

    #[serde(default)]
    pub semantic: SemanticConfig,

    #[serde(default)]
    pub expansion: ExpansionConfig,

    #[serde(default)]
    pub ranking: RankingConfig,

    #[serde(default)]
    pub duplicate: DuplicateConfig,
}

impl RecipeMatchConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: RecipeMatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.canonical
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("canonical: {e}")))?;
        self.semantic
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("semantic: {e}")))?;
        self.to_match_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        Ok(())
    }

    /// The engine-level slice of this configuration.
    pub fn to_match_config(&self) -> MatchConfig {
        MatchConfig {
            version: 1,
            canonical: self.canonical.clone(),
            expansion: self.expansion.clone(),
            ranking: self.ranking.clone(),
            duplicate: self.duplicate.clone(),
        }
    }

    /// Build the configured embedding provider.
    pub fn build_provider(&self) -> Result<Arc<dyn EmbeddingProvider>, ConfigLoadError> {
        build_provider(&self.semantic).map_err(|e| ConfigLoadError::Validation(e.to_string()))
    }

    /// Build a ready-to-use [`Matcher`].
    pub fn build_matcher(&self) -> Result<Matcher, ConfigLoadError> {
        self.validate()?;
        let provider = self.build_provider()?;
        let matcher = Matcher::new(self.to_match_config(), provider)
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        info!(
            name = ?self.name,
            model = matcher.provider().model_name(),
            threshold = self.expansion.similarity_threshold,
            "matcher_configured"
        );
        Ok(matcher)
    }
}

impl Default for RecipeMatchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalizeConfig::default(),
            semantic: SemanticConfig::default(),
            expansion: ExpansionConfig::default(),
            ranking: RankingConfig::default(),
            duplicate: DuplicateConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
canonical:
  version: 1
  collapse_whitespace: true
expansion:
  similarity_threshold: 0.75
duplicate:
  max_title_distance: 4
"#;

        let config = RecipeMatchConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name.as_deref(), Some("test config"));
        assert!(config.canonical.collapse_whitespace);
        assert!(config.canonical.lowercase);
        assert_eq!(config.expansion.similarity_threshold, 0.75);
        assert!(config.expansion.include_aliases);
        assert_eq!(config.duplicate.max_title_distance, 4);
        assert_eq!(config.duplicate.min_ingredient_overlap, 0.8);
        assert_eq!(config.semantic.dimension, 384);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1.0"
ranking:
  default_max_results: 5
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = RecipeMatchConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.ranking.default_max_results, 5);
        assert_eq!(config.ranking.default_min_match_percentage, 50);
    }

    #[test]
    fn test_missing_file() {
        let result = RecipeMatchConfig::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = RecipeMatchConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.to_match_config(), MatchConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let result = RecipeMatchConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_missing_version_is_parse_error() {
        let result = RecipeMatchConfig::from_yaml("name: nameless\n");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = RecipeMatchConfig::from_yaml("version: [unterminated");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_threshold_validation() {
        let yaml = r#"
version: "1.0"
expansion:
  similarity_threshold: 1.2
"#;
        let err = RecipeMatchConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("similarity_threshold"));
    }

    #[test]
    fn test_semantic_validation() {
        let yaml = r#"
version: "1.0"
semantic:
  dimension: 0
"#;
        let err = RecipeMatchConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("semantic"));
        assert!(err.to_string().contains("dimension"));
    }

    #[test]
    fn test_canonical_validation() {
        let yaml = r#"
version: "1.0"
canonical:
  version: 0
"#;
        let err = RecipeMatchConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("canonical"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = RecipeMatchConfig {
            name: Some("round trip".into()),
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(RecipeMatchConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_build_matcher_uses_sections() {
        let yaml = r#"
version: "1"
semantic:
  dimension: 16
  cache_capacity: 32
expansion:
  similarity_threshold: 0.9
"#;
        let matcher = RecipeMatchConfig::from_yaml(yaml)
            .unwrap()
            .build_matcher()
            .unwrap();
        assert_eq!(matcher.provider().dimension(), 16);
        assert_eq!(matcher.config().expansion.similarity_threshold, 0.9);
    }
}
