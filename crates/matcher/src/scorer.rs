use canonical::IngredientSet;
use tracing::debug;

use crate::types::{IngredientCoverage, MatchResult, RecipeCandidate, RecipeIngredientRequirement};

/// True when either name contains the other.
///
/// Deliberately loose: "chicken" satisfies "chicken breast" and vice versa,
/// at the cost of false positives such as "pea" against "peanut".
pub fn ingredient_matches(user: &str, required: &str) -> bool {
    user.contains(required) || required.contains(user)
}

/// Round half-up to two decimal places.
pub(crate) fn round_percentage(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Score how well `user` covers the non-optional `requirements`.
///
/// Requirement names are lower-cased, not trimmed, and reported in
/// declaration order. The percentage is `0.0` when nothing is required.
///
/// ```
/// use canonical::IngredientSet;
/// use matcher::{score, RecipeIngredientRequirement};
///
/// let user: IngredientSet = ["chicken breast".to_string()].into_iter().collect();
/// let coverage = score(&[RecipeIngredientRequirement::required("Chicken")], &user);
/// assert_eq!(coverage.match_percentage, 100.0);
/// assert_eq!(coverage.matched_ingredients, vec!["chicken"]);
/// ```
pub fn score(
    requirements: &[RecipeIngredientRequirement],
    user: &IngredientSet,
) -> IngredientCoverage {
    let user: Vec<String> = user.iter().map(|name| name.to_lowercase()).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for requirement in requirements.iter().filter(|r| !r.optional) {
        let required = requirement.name.to_lowercase();
        if user.iter().any(|u| ingredient_matches(u, &required)) {
            matched.push(required);
        } else {
            missing.push(required);
        }
    }

    let total = matched.len() + missing.len();
    let match_percentage = if total == 0 {
        0.0
    } else {
        round_percentage(matched.len() as f64 * 100.0 / total as f64)
    };

    IngredientCoverage {
        match_percentage,
        matched_ingredients: matched,
        missing_ingredients: missing,
    }
}

/// Score a whole recipe and carry its display fields into the result.
pub fn score_recipe(recipe: &RecipeCandidate, user: &IngredientSet) -> MatchResult {
    let coverage = score(&recipe.ingredients, user);
    debug!(
        recipe_id = %recipe.id,
        match_percentage = coverage.match_percentage,
        missing = coverage.missing_ingredients.len(),
        "recipe_scored"
    );
    MatchResult {
        recipe_id: recipe.id.clone(),
        title: recipe.title.clone(),
        match_percentage: coverage.match_percentage,
        matched_ingredients: coverage.matched_ingredients,
        missing_ingredients: coverage.missing_ingredients,
        cuisine: recipe.cuisine.clone(),
        cook_time: recipe.cook_time,
        difficulty: recipe.difficulty,
        thumbnail: recipe.thumbnail.clone(),
    }
}
