use crate::types::{RecipeCandidate, RecipeFilters};

impl RecipeFilters {
    /// True when `recipe` passes every constrained dimension. Text comparisons
    /// ignore ASCII case.
    pub fn accepts(&self, recipe: &RecipeCandidate) -> bool {
        if !self.cuisines.is_empty() {
            let Some(cuisine) = recipe.cuisine.as_deref() else {
                return false;
            };
            if !self.cuisines.iter().any(|c| c.eq_ignore_ascii_case(cuisine)) {
                return false;
            }
        }

        if let Some(max) = self.max_cook_time {
            match recipe.cook_time {
                Some(minutes) if minutes <= max => {}
                _ => return false,
            }
        }

        if !self.difficulty.is_empty() {
            match recipe.difficulty {
                Some(d) if self.difficulty.contains(&d) => {}
                _ => return false,
            }
        }

        self.dietary.iter().all(|wanted| {
            recipe
                .tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(wanted))
        })
    }
}

/// Recipes eligible for scoring: approved, and accepted by `filters` when given.
pub fn eligible_recipes<'a>(
    recipes: &'a [RecipeCandidate],
    filters: Option<&RecipeFilters>,
) -> Vec<&'a RecipeCandidate> {
    recipes
        .iter()
        .filter(|recipe| recipe.approved)
        .filter(|recipe| filters.is_none_or(|f| f.accepts(recipe)))
        .collect()
}
