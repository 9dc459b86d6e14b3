use std::sync::Arc;
use std::time::Instant;

use canonical::{normalize_names, IngredientSet};
use semantic::{EmbeddingProvider, StubEmbedder};
use tracing::{info, warn, Level};

use crate::catalog::IngredientCatalog;
use crate::config::MatchConfig;
use crate::duplicate::{DuplicateDetector, MAX_TITLE_CHARS};
use crate::error::MatchError;
use crate::expander::SemanticExpander;
use crate::filters::eligible_recipes;
use crate::metrics::metrics_recorder;
use crate::ranker::{rank, validate_ranking};
use crate::scorer::score_recipe;
use crate::types::{
    DuplicateVerdict, ExistingRecipe, IngredientRecord, MatchRequest, MatchResponse,
    RecipeCandidate,
};


/// Wires normalization, expansion, scoring, ranking and duplicate detection
/// behind one configured handle. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
    expander: SemanticExpander,
    detector: DuplicateDetector,
}

/// Ranking parameters after request values and config defaults are merged.
#[derive(Debug, Clone, Copy)]
struct RankingParams {
    min_percentage: u8,
    max_results: usize,
}

impl Matcher {
    /// Construct a matcher from an embedding provider and a validated config.
    pub fn new(
        config: MatchConfig,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        let expander = SemanticExpander::new(provider)
            .with_config(config.expansion.clone())
            .with_canonical_config(config.canonical.clone());
        let detector = DuplicateDetector::new(config.duplicate.clone())
            .with_canonical_config(config.canonical.clone());
        Ok(Self {
            config,
            expander,
            detector,
        })
    }

    /// Convenience constructor backed by the deterministic stub provider.
    pub fn with_stub_provider(config: MatchConfig) -> Result<Self, MatchError> {
        Self::new(config, Arc::new(StubEmbedder::default()))
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn expander(&self) -> &SemanticExpander {
        &self.expander
    }

    pub fn detector(&self) -> &DuplicateDetector {
        &self.detector
    }

    pub fn provider(&self) -> &Arc<dyn EmbeddingProvider> {
        self.expander.provider()
    }

    /// Normalize a raw ingredient list with this matcher's rules.
    pub fn normalize<S: AsRef<str>>(&self, names: &[S]) -> IngredientSet {
        normalize_names(names, &self.config.canonical)
    }

    fn resolve_ranking(&self, req: &MatchRequest) -> Result<RankingParams, MatchError> {
        let params = RankingParams {
            min_percentage: req
                .min_match_percentage
                .unwrap_or(self.config.ranking.default_min_match_percentage),
            max_results: req
                .max_results
                .unwrap_or(self.config.ranking.default_max_results),
        };
        validate_ranking(params.min_percentage, params.max_results)?;
        Ok(params)
    }

    fn validate_request(&self, req: &MatchRequest) -> Result<(IngredientSet, RankingParams), MatchError> {
        let user = self.normalize(&req.ingredients);
        if user.is_empty() {
            return Err(MatchError::InvalidRequest(
                "ingredients list cannot be empty".into(),
            ));
        }
        let params = self.resolve_ranking(req)?;
        Ok((user, params))
    }

    /// Find the recipes the user can best cook with the given ingredients.
    ///
    /// Steps: validate the request, normalize the ingredients, expand them
    /// against `catalog` (when `req.expand`), keep approved recipes that pass
    /// `req.filters`, score each, then rank.
    pub fn match_recipes(
        &self,
        req: &MatchRequest,
        recipes: &[RecipeCandidate],
        catalog: &[IngredientRecord],
    ) -> Result<MatchResponse, MatchError> {
        self.run_match(req, recipes, |user| {
            self.expander.expand(&user.iter().collect::<Vec<_>>(), catalog)
        })
    }

    /// Same as [`match_recipes`](Self::match_recipes) with a catalog collaborator.
    pub fn match_with_catalog(
        &self,
        req: &MatchRequest,
        recipes: &[RecipeCandidate],
        catalog: &dyn IngredientCatalog,
    ) -> Result<MatchResponse, MatchError> {
        self.run_match(req, recipes, |user| {
            self.expander
                .expand_with_catalog(&user.iter().collect::<Vec<_>>(), catalog)
        })
    }

    fn run_match<F>(
        &self,
        req: &MatchRequest,
        recipes: &[RecipeCandidate],
        expand: F,
    ) -> Result<MatchResponse, MatchError>
    where
        F: FnOnce(&IngredientSet) -> Result<IngredientSet, MatchError>,
    {
        let start = Instant::now();
        let (user, params) = match self.validate_request(req) {
            Ok(validated) => validated,
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros() as u64;
                warn!(error = %err, elapsed_micros, "match_rejected");
                return Err(err);
            }
        };

        let span = tracing::span!(
            Level::INFO,
            "matcher.match_recipes",
            candidates = recipes.len(),
            ingredients = user.len(),
            expand = req.expand
        );
        let _guard = span.enter();

        let available = if req.expand { expand(&user)? } else { user };
        let eligible = eligible_recipes(recipes, req.filters.as_ref());
        let results = eligible
            .iter()
            .map(|recipe| score_recipe(recipe, &available))
            .collect();
        let matches = rank(results, params.min_percentage, params.max_results)?;

        let latency = start.elapsed();
        info!(
            candidates = recipes.len(),
            eligible = eligible.len(),
            available = available.len(),
            hits = matches.len(),
            elapsed_micros = latency.as_micros() as u64,
            "match_success"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(recipes.len(), matches.len(), latency);
        }

        Ok(MatchResponse {
            total_results: matches.len(),
            matches,
        })
    }

    /// Check a submission against existing recipes.
    ///
    /// Returns a verdict rather than an error; call
    /// [`DuplicateVerdict::into_result`] to reject duplicates outright.
    pub fn check_duplicate<S: AsRef<str>>(
        &self,
        title: &str,
        ingredients: &[S],
        existing: &[ExistingRecipe],
    ) -> Result<DuplicateVerdict, MatchError> {
        let start = Instant::now();
        if title.trim().is_empty() {
            let err = MatchError::InvalidRequest("title must not be empty".into());
            warn!(error = %err, "duplicate_check_rejected");
            return Err(err);
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            let err = MatchError::InvalidRequest(format!(
                "title must be at most {MAX_TITLE_CHARS} characters"
            ));
            warn!(error = %err, "duplicate_check_rejected");
            return Err(err);
        }

        let span = tracing::span!(
            Level::INFO,
            "matcher.check_duplicate",
            candidates = existing.len()
        );
        let _guard = span.enter();

        let verdict = self.detector.detect(title, ingredients, existing);
        let elapsed_micros = start.elapsed().as_micros() as u64;
        match verdict.duplicate() {
            Some(hit) => info!(
                existing = %hit.title,
                title_distance = hit.title_distance,
                ingredient_overlap = hit.ingredient_overlap,
                elapsed_micros,
                "duplicate_detected"
            ),
            None => info!(elapsed_micros, "duplicate_check_clear"),
        }
        Ok(verdict)
    }
}
