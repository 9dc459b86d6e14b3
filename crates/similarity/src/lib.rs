//! Similarity primitives shared by semantic expansion and duplicate detection.
//!
//! - [`cosine_similarity`] compares embedding vectors.
//! - [`jaccard`] measures overlap between two ingredient sets.
//! - [`levenshtein`] measures edit distance between two recipe titles.
//!
//! All three are pure and total for well-formed input. The only error is a
//! length mismatch in [`cosine_similarity`]; callers comparing against a
//! catalog are expected to skip that entry and carry on.

mod cosine;
mod error;
mod jaccard;
mod levenshtein;

pub use crate::cosine::cosine_similarity;
pub use crate::error::SimilarityError;
pub use crate::jaccard::jaccard;
pub use crate::levenshtein::levenshtein;
