//! # Recipe Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers two questions:
//!
//! - *What can I cook?* Given the ingredients a user has, score every
//!   candidate recipe by how many of its required ingredients are covered and
//!   return the best few.
//! - *Has this been posted already?* Given a new recipe submission, find an
//!   existing recipe with a near-identical title and a heavily overlapping
//!   ingredient list.
//!
//! It sits on top of `canonical` (name normalization), `semantic` (embedding
//! providers) and `similarity` (cosine, Jaccard, Levenshtein). Storage is the
//! caller's job: recipes, the ingredient catalog and the existing-recipe corpus
//! are passed in already loaded.
//!
//! ## Pipeline
//!
//! 1. **Normalize** the user's ingredients (lower-case, trim, dedupe).
//! 2. **Expand** them with [`SemanticExpander`]: catalog entries whose
//!    embedding is close to a user ingredient, plus aliases of exact catalog
//!    hits.
//! 3. **Filter** to approved recipes accepted by the request's
//!    [`RecipeFilters`].
//! 4. **Score** each recipe with [`score_recipe`]. A required ingredient is
//!    covered when its name and a user ingredient contain one another.
//! 5. **Rank** with [`rank`]: drop results below the minimum percentage,
//!    sort descending (stable) and truncate.
//!
//! Duplicate detection ([`DuplicateDetector`]) runs separately at submission
//! time.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{
//!     MatchConfig, MatchRequest, Matcher, RecipeCandidate, RecipeIngredientRequirement as Req,
//! };
//!
//! let matcher = Matcher::with_stub_provider(MatchConfig::default()).unwrap();
//! let recipes = vec![RecipeCandidate::new("r1", "Garlic Chicken").with_ingredients(vec![
//!     Req::required("chicken"),
//!     Req::required("garlic"),
//!     Req::optional("parsley"),
//! ])];
//!
//! let req = MatchRequest::new(["Chicken Breast", "garlic"]);
//! let response = matcher.match_recipes(&req, &recipes, &[]).unwrap();
//! assert_eq!(response.matches[0].match_percentage, 100.0);
//! ```
//!
//! ## Observability
//!
//! Every entry point logs through `tracing`. Install a [`MatchMetrics`]
//! implementation via [`set_match_metrics`] to record latency and counts;
//! this is typically done once during startup.

pub mod catalog;
pub mod config;
pub mod duplicate;
pub mod engine;
pub mod error;
pub mod expander;
pub mod filters;
pub mod metrics;
pub mod ranker;
pub mod scorer;
pub mod types;

pub use crate::catalog::{embed_catalog, InMemoryCatalog, IngredientCatalog};
pub use crate::config::{
    DuplicateConfig, ExpansionConfig, MatchConfig, RankingConfig, MAX_RESULTS_LIMIT,
};
pub use crate::duplicate::{DuplicateDetector, MAX_TITLE_CHARS};
pub use crate::engine::Matcher;
pub use crate::error::{CatalogError, MatchError};
pub use crate::expander::SemanticExpander;
pub use crate::filters::eligible_recipes;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::ranker::{rank, validate_ranking};
pub use crate::scorer::{ingredient_matches, score, score_recipe};
pub use crate::types::{
    Difficulty, DuplicateMatch, DuplicateVerdict, ExistingRecipe, IngredientCategory,
    IngredientCoverage, IngredientRecord, MatchRequest, MatchResponse, MatchResult,
    RecipeCandidate, RecipeFilters, RecipeIngredientRequirement,
};
