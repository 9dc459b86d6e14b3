use crate::config::MAX_RESULTS_LIMIT;
use crate::error::MatchError;
use crate::types::MatchResult;

/// Check ranking parameters: `min_percentage` in `[0, 100]`, `max_results` in
/// `[1, 100]`.
pub fn validate_ranking(min_percentage: u8, max_results: usize) -> Result<(), MatchError> {
    if min_percentage > 100 {
        return Err(MatchError::InvalidRequest(
            "min_match_percentage must be between 0 and 100".into(),
        ));
    }
    if max_results == 0 || max_results > MAX_RESULTS_LIMIT {
        return Err(MatchError::InvalidRequest(format!(
            "max_results must be between 1 and {MAX_RESULTS_LIMIT}"
        )));
    }
    Ok(())
}

/// Drop results under `min_percentage`, order the rest by descending match
/// percentage and keep the first `max_results`.
///
/// The sort is stable, so equal percentages keep their input order.
pub fn rank(
    mut results: Vec<MatchResult>,
    min_percentage: u8,
    max_results: usize,
) -> Result<Vec<MatchResult>, MatchError> {
    validate_ranking(min_percentage, max_results)?;

    let min = f64::from(min_percentage);
    results.retain(|r| r.match_percentage >= min);
    results.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    results.truncate(max_results);
    Ok(results)
}
