use fxhash::hash64;

use crate::normalize::l2_normalize_in_place;
use crate::{EmbeddingProvider, SemanticConfig, SemanticError};

/// Deterministic placeholder embedder.
///
/// Seeds a PRNG from a hash of the input text and draws standard-normal
/// components, so identical strings always map to identical vectors while
/// unrelated strings land roughly orthogonal. There is no semantic signal:
/// similarity between two different ingredients is noise, which makes the
/// stub useful for wiring and tests but not for real expansion.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    dimension: usize,
    normalize: bool,
    model_name: String,
}

impl StubEmbedder {
    pub const DEFAULT_DIMENSION: usize = 384;

    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            normalize: false,
            model_name: "stub-gaussian".into(),
        }
    }

    pub fn from_config(cfg: &SemanticConfig) -> Result<Self, SemanticError> {
        cfg.validate()?;
        Ok(Self {
            dimension: cfg.dimension,
            normalize: cfg.normalize,
            model_name: cfg.model_name.clone(),
        })
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMENSION)
    }
}

impl EmbeddingProvider for StubEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        let mut rng = fastrand::Rng::with_seed(hash64(text.as_bytes()));
        let mut v: Vec<f32> = (0..self.dimension)
            .map(|_| standard_normal(&mut rng) as f32)
            .collect();
        if self.normalize {
            l2_normalize_in_place(&mut v);
        }
        Ok(v)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Box-Muller transform. `1.0 - f64()` keeps the log argument in (0, 1].
fn standard_normal(rng: &mut fastrand::Rng) -> f64 {
    let u1 = 1.0 - rng.f64();
    let u2 = rng.f64();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
