use canonical::CanonicalizeConfig;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Upper bound for `max_results` on any request.
pub const MAX_RESULTS_LIMIT: usize = 100;

/// Tuning for [`SemanticExpander`](crate::SemanticExpander).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Catalog entries with cosine similarity at or above this value join the
    /// expanded set.
    pub similarity_threshold: f32,
    /// Add the aliases of an exact catalog hit.
    pub include_aliases: bool,
    /// Fan the catalog scan out over the rayon pool.
    pub use_parallel: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.8,
            include_aliases: true,
            use_parallel: false,
        }
    }
}

impl ExpansionConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.similarity_threshold.is_finite()
            || !(-1.0..=1.0).contains(&self.similarity_threshold)
        {
            return Err(MatchError::InvalidConfig(
                "expansion.similarity_threshold must be within [-1.0, 1.0]".into(),
            ));
        }
        Ok(())
    }
}

/// Defaults applied when a request leaves its ranking parameters unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RankingConfig {
    pub default_min_match_percentage: u8,
    pub default_max_results: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_min_match_percentage: 50,
            default_max_results: 20,
        }
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.default_min_match_percentage > 100 {
            return Err(MatchError::InvalidConfig(
                "ranking.default_min_match_percentage must be <= 100".into(),
            ));
        }
        if self.default_max_results == 0 || self.default_max_results > MAX_RESULTS_LIMIT {
            return Err(MatchError::InvalidConfig(format!(
                "ranking.default_max_results must be within [1, {MAX_RESULTS_LIMIT}]"
            )));
        }
        Ok(())
    }
}

/// Thresholds for [`DuplicateDetector`](crate::DuplicateDetector). Both
/// comparisons are strict: distance `< max_title_distance` and overlap
/// `> min_ingredient_overlap`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DuplicateConfig {
    pub max_title_distance: usize,
    pub min_ingredient_overlap: f64,
    pub use_parallel: bool,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            max_title_distance: 3,
            min_ingredient_overlap: 0.8,
            use_parallel: false,
        }
    }
}

impl DuplicateConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.min_ingredient_overlap.is_finite()
            || !(0.0..=1.0).contains(&self.min_ingredient_overlap)
        {
            return Err(MatchError::InvalidConfig(
                "duplicate.min_ingredient_overlap must be within [0.0, 1.0]".into(),
            ));
        }
        Ok(())
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    pub version: u32,
    pub canonical: CanonicalizeConfig,
    pub expansion: ExpansionConfig,
    pub ranking: RankingConfig,
    pub duplicate: DuplicateConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            canonical: CanonicalizeConfig::default(),
            expansion: ExpansionConfig::default(),
            ranking: RankingConfig::default(),
            duplicate: DuplicateConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig("version must be >= 1".into()));
        }
        self.canonical.validate()?;
        self.expansion.validate()?;
        self.ranking.validate()?;
        self.duplicate.validate()
    }

    pub fn with_expansion(mut self, expansion: ExpansionConfig) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn with_ranking(mut self, ranking: RankingConfig) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_duplicate(mut self, duplicate: DuplicateConfig) -> Self {
        self.duplicate = duplicate;
        self
    }
}
