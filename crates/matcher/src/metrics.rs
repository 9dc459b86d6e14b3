// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`];
// the expander, duplicate detector and `Matcher` then report latency and
// counts without depending on a specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for matching operations.
pub trait MatchMetrics: Send + Sync {
    /// Record one `match_recipes` call.
    ///
    /// `candidates` is the number of recipes supplied by the caller,
    /// `hit_count` the number returned after filtering and ranking.
    fn record_match(&self, candidates: usize, hit_count: usize, latency: Duration);

    /// Record one semantic expansion.
    fn record_expansion(&self, _input: usize, _expanded: usize, _latency: Duration) {}

    /// Record one duplicate check over `compared` existing recipes.
    fn record_duplicate_check(&self, _compared: usize, _duplicate: bool, _latency: Duration) {}
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// Typically called once during startup so every [`Matcher`](crate::Matcher)
/// shares the same backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
