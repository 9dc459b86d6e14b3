//! Workspace umbrella crate for recipe ingredient matching.
//!
//! This crate stitches the workspace members together so callers get one
//! dependency and one entry point:
//!
//! - [`canonical`]: ingredient name normalization
//! - [`semantic`]: embedding providers (deterministic stub, LRU cache)
//! - [`similarity`]: cosine, Jaccard and Levenshtein
//! - [`matcher`]: semantic expansion, scoring, ranking, duplicate detection
//!
//! On top of those it adds YAML configuration ([`RecipeMatchConfig`]) and
//! JSON fixtures ([`Fixture`]) used by the `recipe-match` binary.
//!
//! ```
//! use recipe_match::{MatchRequest, RecipeCandidate, RecipeIngredientRequirement, RecipeMatchConfig};
//!
//! let matcher = RecipeMatchConfig::default().build_matcher().unwrap();
//! let recipes = vec![RecipeCandidate::new("omelette", "Omelette").with_ingredients(vec![
//!     RecipeIngredientRequirement::required("egg"),
//!     RecipeIngredientRequirement::required("butter"),
//! ])];
//!
//! let response = matcher
//!     .match_recipes(&MatchRequest::new(["Eggs", "butter"]), &recipes, &[])
//!     .unwrap();
//! assert_eq!(response.total_results, 1);
//! ```

pub mod config;
pub mod fixture;

pub use config::{ConfigLoadError, RecipeMatchConfig};
pub use fixture::{Fixture, FixtureError};

pub use canonical::{
    CanonicalError, CanonicalizeConfig, IngredientSet, collapse_whitespace, normalize_name,
    normalize_names, normalize_title,
};
pub use matcher::{
    CatalogError, Difficulty, DuplicateConfig, DuplicateDetector, DuplicateMatch,
    DuplicateVerdict, ExistingRecipe, ExpansionConfig, InMemoryCatalog, IngredientCatalog,
    IngredientCategory, IngredientCoverage, IngredientRecord, MAX_RESULTS_LIMIT, MAX_TITLE_CHARS,
    MatchConfig, MatchError, MatchMetrics, MatchRequest, MatchResponse, MatchResult, Matcher,
    RankingConfig, RecipeCandidate, RecipeFilters, RecipeIngredientRequirement, SemanticExpander,
    eligible_recipes, embed_catalog, ingredient_matches, rank, score, score_recipe,
    set_match_metrics,
};
pub use semantic::{
    CacheStats, CachedEmbedder, EmbeddingProvider, SemanticConfig, SemanticError, StubEmbedder,
    build_provider,
};
pub use similarity::{SimilarityError, cosine_similarity, jaccard, levenshtein};
