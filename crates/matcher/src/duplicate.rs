use std::time::Instant;

use canonical::{normalize_names, normalize_title, CanonicalizeConfig, IngredientSet};
use rayon::prelude::*;
use similarity::{jaccard, levenshtein};
use tracing::debug;

use crate::config::DuplicateConfig;
use crate::metrics::metrics_recorder;
use crate::types::{DuplicateMatch, DuplicateVerdict, ExistingRecipe};

/// Longest submitted title, in characters, that a duplicate check accepts.
pub const MAX_TITLE_CHARS: usize = 200;

/// Flags a submission whose title is within a few edits of an existing
/// recipe's title and whose ingredient set overlaps it heavily.
///
/// Existing recipes are checked in order and the first that passes both
/// thresholds is reported, even if a later one is closer.
#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    config: DuplicateConfig,
    canonical: CanonicalizeConfig,
}

impl DuplicateDetector {
    pub fn new(config: DuplicateConfig) -> Self {
        Self {
            config,
            canonical: CanonicalizeConfig::default(),
        }
    }

    pub fn with_canonical_config(mut self, canonical: CanonicalizeConfig) -> Self {
        self.canonical = canonical;
        self
    }

    pub fn config(&self) -> &DuplicateConfig {
        &self.config
    }

    pub fn detect<S: AsRef<str>>(
        &self,
        title: &str,
        ingredient_names: &[S],
        existing: &[ExistingRecipe],
    ) -> DuplicateVerdict {
        let start = Instant::now();
        let title = normalize_title(title);
        let ingredients = normalize_names(ingredient_names, &self.canonical);

        let found = if self.config.use_parallel {
            existing
                .par_iter()
                .find_map_first(|recipe| self.compare(&title, &ingredients, recipe))
        } else {
            existing
                .iter()
                .find_map(|recipe| self.compare(&title, &ingredients, recipe))
        };

        let latency = start.elapsed();
        if let Some(recorder) = metrics_recorder() {
            recorder.record_duplicate_check(existing.len(), found.is_some(), latency);
        }

        match found {
            Some(hit) => DuplicateVerdict::Duplicate(hit),
            None => DuplicateVerdict::Unique,
        }
    }

    fn compare(
        &self,
        title: &str,
        ingredients: &IngredientSet,
        recipe: &ExistingRecipe,
    ) -> Option<DuplicateMatch> {
        let theirs = normalize_title(&recipe.title);
        // The length gap bounds the edit distance from below.
        let gap = title.chars().count().abs_diff(theirs.chars().count());
        if gap >= self.config.max_title_distance {
            return None;
        }
        let title_distance = levenshtein(title, &theirs);
        if title_distance >= self.config.max_title_distance {
            return None;
        }

        let their_ingredients = normalize_names(&recipe.ingredient_names, &self.canonical);
        let ingredient_overlap = jaccard(ingredients, &their_ingredients);
        debug!(
            existing = %recipe.title,
            title_distance,
            ingredient_overlap,
            "duplicate_candidate"
        );
        if ingredient_overlap <= self.config.min_ingredient_overlap {
            return None;
        }

        Some(DuplicateMatch {
            recipe_id: recipe.id.clone(),
            title: recipe.title.clone(),
            title_distance,
            ingredient_overlap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> DuplicateDetector {
        DuplicateDetector::default()
    }

    #[test]
    fn identical_recipe_is_duplicate() {
        let existing = [ExistingRecipe::new("Chicken Pasta", ["chicken", "pasta", "garlic"]).with_id("r1")];
        let verdict = detector().detect("Chicken Pasta", &["chicken", "pasta", "garlic"], &existing);
        let hit = verdict.duplicate().expect("duplicate expected");
        assert_eq!(hit.recipe_id.as_deref(), Some("r1"));
        assert_eq!(hit.title_distance, 0);
        assert_eq!(hit.ingredient_overlap, 1.0);
    }

    #[test]
    fn different_title_is_unique() {
        let existing = [ExistingRecipe::new("Beef Stew", ["beef", "potato"])];
        let verdict = detector().detect("Chicken Pasta", &["chicken", "pasta"], &existing);
        assert_eq!(verdict, DuplicateVerdict::Unique);
    }

    #[test]
    fn normalization_applies_to_titles_and_ingredients() {
        let existing = [ExistingRecipe::new("  chicken PASTA", ["Chicken ", "PASTA", "garlic"])];
        let verdict = detector().detect("Chicken Pasta ", &["chicken", "pasta", " Garlic"], &existing);
        assert!(verdict.is_duplicate());
    }

    #[test]
    fn distance_threshold_is_strict() {
        let ingredients = ["a", "b", "c"];
        // "chicken pasta" -> "chicken pastry" is two edits, "chicken pastries" more.
        let near = [ExistingRecipe::new("Chicken Pastry", ingredients)];
        let far = [ExistingRecipe::new("Chicken Pastries", ingredients)];
        assert!(detector().detect("Chicken Pasta", &ingredients, &near).is_duplicate());
        assert!(!detector().detect("Chicken Pasta", &ingredients, &far).is_duplicate());
    }

    #[test]
    fn overlap_threshold_is_strict() {
        // 4 shared of 5 total is exactly 0.8, which does not qualify.
        let existing = [ExistingRecipe::new("Omelette", ["egg", "milk", "salt", "pepper", "chive"])];
        let verdict = detector().detect("Omelette", &["egg", "milk", "salt", "pepper"], &existing);
        assert!(!verdict.is_duplicate());
    }

    #[test]
    fn empty_ingredient_sets_never_duplicate() {
        let existing = [ExistingRecipe::new("Toast", Vec::<String>::new())];
        let none: [&str; 0] = [];
        assert!(!detector().detect("Toast", &none, &existing).is_duplicate());
    }

    #[test]
    fn first_qualifying_recipe_wins() {
        let ingredients = ["chicken", "pasta", "garlic", "basil", "oil"];
        let existing = [
            ExistingRecipe::new("Beef Stew", ["beef"]).with_id("skip"),
            ExistingRecipe::new("Chicken Pastas", ingredients).with_id("first"),
            ExistingRecipe::new("Chicken Pasta", ingredients).with_id("closer"),
        ];
        for use_parallel in [false, true] {
            let detector = DuplicateDetector::new(DuplicateConfig {
                use_parallel,
                ..Default::default()
            });
            let verdict = detector.detect("Chicken Pasta", &ingredients, &existing);
            assert_eq!(verdict.duplicate().unwrap().recipe_id.as_deref(), Some("first"));
        }
    }

    #[test]
    fn empty_corpus_is_unique() {
        assert_eq!(detector().detect("Anything", &["x"], &[]), DuplicateVerdict::Unique);
    }

    #[test]
    fn thresholds_are_configurable() {
        let detector = DuplicateDetector::new(DuplicateConfig {
            max_title_distance: 10,
            min_ingredient_overlap: 0.3,
            ..Default::default()
        });
        let existing = [ExistingRecipe::new("Beef Pasta", ["beef", "pasta", "garlic"])];
        assert!(detector
            .detect("Chicken Pasta", &["chicken", "pasta", "garlic"], &existing)
            .is_duplicate());
    }

    #[test]
    fn length_gap_alone_rules_out_titles() {
        let ingredients = ["flour", "sugar", "butter"];
        let long_title = "shortbread ".repeat(5_000);
        let existing = [
            ExistingRecipe::new(long_title.as_str(), ingredients).with_id("long"),
            ExistingRecipe::new("Shortbreads", ingredients).with_id("near"),
        ];
        let verdict = detector().detect("Shortbread", &ingredients, &existing);
        assert_eq!(verdict.duplicate().unwrap().recipe_id.as_deref(), Some("near"));

        // A gap of exactly the threshold is already too far.
        let three_longer = [ExistingRecipe::new("Shortbreadxyz", ingredients)];
        assert!(!detector().detect("Shortbread", &ingredients, &three_longer).is_duplicate());
    }
}
