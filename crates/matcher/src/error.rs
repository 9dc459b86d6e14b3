use canonical::CanonicalError;
use semantic::SemanticError;
use similarity::SimilarityError;
use thiserror::Error;

/// Errors raised by an ingredient catalog collaborator.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be reached.
    #[error("ingredient catalog unavailable: {0}")]
    Unavailable(String),
    /// Catalog data could not be decoded.
    #[error("malformed ingredient catalog: {0}")]
    Malformed(String),
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid engine configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Request parameters out of range or missing.
    #[error("invalid match request: {0}")]
    InvalidRequest(String),
    /// A submitted recipe is a near-duplicate of an existing one.
    #[error("Duplicate recipe detected: similar to existing recipe '{title}'")]
    DuplicateRecipe { title: String },
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
    #[error("similarity error: {0}")]
    Similarity(#[from] SimilarityError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
