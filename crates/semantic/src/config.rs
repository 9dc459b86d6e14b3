use serde::{Deserialize, Serialize};

use crate::SemanticError;

/// Providers this crate can build from configuration alone.
pub const SUPPORTED_PROVIDERS: [&str; 1] = ["stub"];

/// Runtime configuration describing which embedding provider to build and how
/// to post-process its vectors.
///
/// # Example
/// ```
/// use semantic::{build_provider, SemanticConfig};
///
/// let cfg = SemanticConfig {
///     dimension: 64,
///     cache_capacity: Some(128),
///     ..Default::default()
/// };
///
/// let provider = build_provider(&cfg).unwrap();
/// assert_eq!(provider.dimension(), 64);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SemanticConfig {
    /// Provider selector. Only `"stub"` ships with this crate; real models
    /// implement [`EmbeddingProvider`](crate::EmbeddingProvider) directly.
    pub provider: String,
    /// Friendly label reported by the provider.
    pub model_name: String,
    /// Vector dimension produced by the provider.
    pub dimension: usize,
    /// L2-normalize vectors before returning them. Cosine similarity is
    /// scale-invariant, so this only matters for callers that store vectors.
    pub normalize: bool,
    /// Wrap the provider in an LRU cache holding this many vectors. `None`
    /// disables caching.
    pub cache_capacity: Option<usize>,
}

impl SemanticConfig {
    /// Validate the configuration before building a provider.
    pub fn validate(&self) -> Result<(), SemanticError> {
        if !SUPPORTED_PROVIDERS.contains(&self.provider.as_str()) {
            return Err(SemanticError::InvalidConfig(format!(
                "provider must be one of: {SUPPORTED_PROVIDERS:?}, got {:?}",
                self.provider
            )));
        }
        if self.dimension == 0 {
            return Err(SemanticError::InvalidConfig(
                "dimension must be greater than zero".into(),
            ));
        }
        if self.cache_capacity == Some(0) {
            return Err(SemanticError::InvalidConfig(
                "cache_capacity must be greater than zero when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            provider: "stub".into(),
            model_name: "stub-gaussian".into(),
            dimension: 384,
            normalize: false,
            cache_capacity: Some(4096),
        }
    }
}
