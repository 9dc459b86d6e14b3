use std::collections::BTreeSet;

/// Jaccard overlap `|A ∩ B| / |A ∪ B|`, in `[0, 1]`.
///
/// Returns `0.0` when either set is empty, so two empty ingredient lists never
/// count as overlapping.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|item| large.contains(item)).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
