use crate::SimilarityError;

/// Chunk size for the accumulation loop; keeps the hot loop auto-vectorizable.
const CHUNK_SIZE: usize = 32;

/// Cosine similarity between two dense vectors, in `[-1, 1]`.
///
/// Fails when the lengths differ. A zero-norm vector on either side yields
/// `0.0` rather than `NaN`, as do two empty vectors.
///
/// ```
/// use similarity::cosine_similarity;
///
/// let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 1.0]).unwrap();
/// assert!((sim - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (ca, cb) in a.chunks(CHUNK_SIZE).zip(b.chunks(CHUNK_SIZE)) {
        let (d, na, nb) = accumulate_chunk(ca, cb);
        dot += d;
        norm_a += na;
        norm_b += nb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let sim = dot / (norm_a.sqrt() * norm_b.sqrt());
    Ok(sim.clamp(-1.0, 1.0) as f32)
}

/// Products are taken in `f64` so extreme `f32` magnitudes neither overflow
/// nor flush to zero.
#[inline(always)]
fn accumulate_chunk(a: &[f32], b: &[f32]) -> (f64, f64, f64) {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    (dot, norm_a, norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let a = [0.3f32, -1.2, 4.5, 0.01];
        let sim = cosine_similarity(&a, &a).unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn opposite_vectors_score_minus_one() {
        let sim = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]).unwrap();
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let sim = cosine_similarity(&[1.0, 0.0, 0.0], &[0.0, 3.0, 0.0]).unwrap();
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn zero_norm_yields_zero() {
        assert_eq!(cosine_similarity(&[0.0; 4], &[1.0; 4]).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&[1.0; 4], &[0.0; 4]).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert_eq!(
            cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(SimilarityError::DimensionMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn scale_invariant() {
        let a: Vec<f32> = (0..100).map(|i| (i as f32 * 0.37).sin()).collect();
        let b: Vec<f32> = (0..100).map(|i| (i as f32 * 0.11).cos()).collect();
        let scaled: Vec<f32> = a.iter().map(|x| x * 42.0).collect();
        let s1 = cosine_similarity(&a, &b).unwrap();
        let s2 = cosine_similarity(&scaled, &b).unwrap();
        assert!((s1 - s2).abs() < 1e-5);
    }

    #[test]
    fn tiny_magnitudes_keep_unit_similarity() {
        // Squares of 1e-25 underflow in f32.
        let a = [1e-25f32; 4];
        let sim = cosine_similarity(&a, &a).unwrap();
        assert!((sim - 1.0).abs() < 1e-6, "got {sim}");
    }

    #[test]
    fn huge_magnitudes_stay_finite() {
        // Squares of 1e20 overflow in f32.
        let a = [1e20f32, 3e20];
        let sim = cosine_similarity(&a, &a).unwrap();
        assert!(sim.is_finite());
        assert!((sim - 1.0).abs() < 1e-6, "got {sim}");

        let b = [3e20f32, -1e20];
        assert!(cosine_similarity(&a, &b).unwrap().abs() < 1e-6);
    }

    #[test]
    fn chunked_matches_scalar_reference() {
        let a: Vec<f32> = (0..77).map(|i| ((i * 7) % 13) as f32 - 6.0).collect();
        let b: Vec<f32> = (0..77).map(|i| ((i * 5) % 11) as f32 - 5.0).collect();
        let dot: f32 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
        let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        let expected = dot / (na * nb);
        let result = cosine_similarity(&a, &b).unwrap();
        assert!((result - expected).abs() < 1e-5);
    }
}
