use thiserror::Error;

/// Errors from similarity scoring.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityError {
    /// Cosine similarity needs vectors of equal length.
    #[error("vector dimension mismatch: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },
}
