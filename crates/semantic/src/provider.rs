use crate::SemanticError;

/// Maps a normalized ingredient name to a fixed-dimension vector.
///
/// Implementations must be pure: the same text always yields the same vector.
/// Callers rely on this to cache vectors and to reproduce expansions in tests.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError>;

    /// Embed many texts. The default applies [`embed`](Self::embed) elementwise;
    /// network-backed providers should override this with a real batch call.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, SemanticError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// Length of every vector this provider returns.
    fn dimension(&self) -> usize;

    /// Label surfaced in logs.
    fn model_name(&self) -> &str;
}

impl<P: EmbeddingProvider + ?Sized> EmbeddingProvider for std::sync::Arc<P> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        (**self).embed(text)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, SemanticError> {
        (**self).embed_batch(texts)
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Check that `vector` has the dimension `provider` declares.
pub fn ensure_dimension<P>(provider: &P, vector: &[f32]) -> Result<(), SemanticError>
where
    P: EmbeddingProvider + ?Sized,
{
    let expected = provider.dimension();
    if vector.len() != expected {
        return Err(SemanticError::DimensionMismatch {
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct LengthEmbedder;

    impl EmbeddingProvider for LengthEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
            Ok(vec![text.len() as f32, 1.0])
        }

        fn dimension(&self) -> usize {
            2
        }

        fn model_name(&self) -> &str {
            "length"
        }
    }

    #[test]
    fn default_batch_is_elementwise() {
        let provider = LengthEmbedder;
        let batch = provider.embed_batch(&["egg", "butter"]).unwrap();
        assert_eq!(batch, vec![vec![3.0, 1.0], vec![6.0, 1.0]]);
    }

    #[test]
    fn arc_forwards_to_inner_provider() {
        let provider: Arc<dyn EmbeddingProvider> = Arc::new(LengthEmbedder);
        assert_eq!(provider.dimension(), 2);
        assert_eq!(provider.model_name(), "length");
        assert_eq!(provider.embed("milk").unwrap(), vec![4.0, 1.0]);
    }

    #[test]
    fn ensure_dimension_reports_mismatch() {
        let provider = LengthEmbedder;
        assert!(ensure_dimension(&provider, &[1.0, 2.0]).is_ok());
        assert_eq!(
            ensure_dimension(&provider, &[1.0]),
            Err(SemanticError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
