//! Ingredient embeddings.
//!
//! Semantic expansion needs a vector per ingredient name. This crate defines
//! the [`EmbeddingProvider`] seam and ships two implementations:
//!
//! - [`StubEmbedder`] - hash-seeded Gaussian vectors. Deterministic, no model
//!   files, no network. Same text, same vector.
//! - [`CachedEmbedder`] - an LRU cache wrapped around any other provider.
//!
//! Real models (ONNX, hosted APIs) plug in by implementing the trait; the
//! matcher only ever sees `Arc<dyn EmbeddingProvider>`.
//!
//! ## Quick example
//!
//! ```
//! use semantic::{EmbeddingProvider, StubEmbedder};
//!
//! let provider = StubEmbedder::default();
//! let a = provider.embed("chicken").unwrap();
//! let b = provider.embed("chicken").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 384);
//! ```

mod cache;
mod config;
mod error;
mod normalize;
mod provider;
mod stub;

use std::num::NonZeroUsize;
use std::sync::Arc;

use tracing::info;

pub use cache::{CacheStats, CachedEmbedder};
pub use config::{SemanticConfig, SUPPORTED_PROVIDERS};
pub use error::SemanticError;
pub use normalize::l2_normalize_in_place;
pub use provider::{ensure_dimension, EmbeddingProvider};
pub use stub::StubEmbedder;

/// Build the provider described by `cfg`, wrapped in a cache when
/// `cache_capacity` is set.
pub fn build_provider(cfg: &SemanticConfig) -> Result<Arc<dyn EmbeddingProvider>, SemanticError> {
    cfg.validate()?;
    let stub = StubEmbedder::from_config(cfg)?;

    let provider: Arc<dyn EmbeddingProvider> =
        match cfg.cache_capacity.and_then(NonZeroUsize::new) {
            Some(capacity) => Arc::new(CachedEmbedder::new(stub, capacity)),
            None => Arc::new(stub),
        };

    info!(
        provider = %cfg.provider,
        model = provider.model_name(),
        dimension = provider.dimension(),
        cache_capacity = ?cfg.cache_capacity,
        "embedding_provider_ready"
    );
    Ok(provider)
}
