//! Configuration for ingredient name normalization.
//!
//! [`CanonicalizeConfig`] controls how raw ingredient strings typed by a user
//! (or declared on a recipe) are turned into matching keys.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change that can alter the
//! normalized output of an existing input must bump it, so cached expansions
//! and stored match keys can be told apart.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.lowercase);
//! assert!(config.trim);
//! assert!(!config.normalize_unicode);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the ingredient normalizer.
///
/// The defaults lower-case and trim each entry and drop entries that end up
/// empty. Unicode NFKC folding and interior whitespace collapsing are opt-in.
///
/// ```json
/// {
///   "version": 1,
///   "lowercase": true,
///   "trim": true,
///   "normalize_unicode": false,
///   "collapse_whitespace": false,
///   "drop_empty": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Version of the normalization rules. Must be >= 1.
    pub version: u32,

    /// Apply locale-free Unicode lower-casing.
    pub lowercase: bool,

    /// Strip leading and trailing whitespace.
    pub trim: bool,

    /// Apply Unicode NFKC normalization before the other transforms.
    ///
    /// With this enabled, `"Jalape\u{00F1}o"` and `"Jalapen\u{0303}o"` map to
    /// the same key.
    pub normalize_unicode: bool,

    /// Collapse interior runs of whitespace into one ASCII space
    /// (`"olive   oil"` becomes `"olive oil"`).
    pub collapse_whitespace: bool,

    /// Drop entries that are empty after normalization.
    ///
    /// An empty key is a substring of every requirement name and would make
    /// every recipe a full match.
    pub drop_empty: bool,
}

impl CanonicalizeConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            lowercase: true,
            trim: true,
            normalize_unicode: false,
            collapse_whitespace: false,
            drop_empty: true,
        }
    }
}
