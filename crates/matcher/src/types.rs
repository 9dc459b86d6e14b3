use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Coarse grouping for catalog ingredients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientCategory {
    Protein,
    Vegetable,
    Fruit,
    Dairy,
    Grain,
    Spice,
    Condiment,
    Oil,
    Sweetener,
    Beverage,
    #[default]
    Other,
}

/// Recipe difficulty as published by the recipe catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A catalog ingredient. Read-only to the matcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IngredientRecord {
    #[serde(default)]
    pub id: Option<String>,
    /// Canonical display name.
    pub name: String,
    /// Alternative names ("scallion" for "green onion").
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub category: IngredientCategory,
    /// Precomputed embedding of the normalized name. Records without one are
    /// only reachable through exact name lookup.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl IngredientRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: IngredientCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// True when the record carries a usable (non-empty) embedding.
    pub fn has_embedding(&self) -> bool {
        self.embedding.as_ref().is_some_and(|e| !e.is_empty())
    }
}

/// An ingredient line declared by a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeIngredientRequirement {
    pub name: String,
    /// Optional lines never count toward the match percentage.
    #[serde(default)]
    pub optional: bool,
}

impl RecipeIngredientRequirement {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: true,
        }
    }
}

fn default_approved() -> bool {
    true
}

/// A recipe supplied by the caller for scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeCandidate {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientRequirement>,
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Total cook time in minutes.
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Dietary tags ("vegetarian", "gluten-free", ...).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unapproved recipes are never returned by a search.
    #[serde(default = "default_approved")]
    pub approved: bool,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl RecipeCandidate {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ingredients: Vec::new(),
            cuisine: None,
            cook_time: None,
            difficulty: None,
            tags: Vec::new(),
            approved: true,
            thumbnail: None,
        }
    }

    pub fn with_ingredients(mut self, ingredients: Vec<RecipeIngredientRequirement>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_cook_time(mut self, minutes: u32) -> Self {
        self.cook_time = Some(minutes);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }
}

/// Coarse candidate filters applied before scoring. Empty lists and `None`
/// leave that dimension unconstrained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RecipeFilters {
    pub cuisines: Vec<String>,
    pub max_cook_time: Option<u32>,
    pub difficulty: Vec<Difficulty>,
    /// Every listed tag must be present on the recipe.
    pub dietary: Vec<String>,
}

/// How well a requirement list is covered by a user's ingredients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientCoverage {
    /// In `[0, 100]`, two decimal places.
    pub match_percentage: f64,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
}

/// Scored recipe returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub recipe_id: String,
    pub title: String,
    pub match_percentage: f64,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

fn default_expand() -> bool {
    true
}

/// A "what can I cook" request.
///
/// `min_match_percentage` and `max_results` fall back to the engine's
/// [`RankingConfig`](crate::RankingConfig) defaults (50 and 20) when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRequest {
    /// Ingredients the user has on hand. Must contain at least one non-blank entry.
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub min_match_percentage: Option<u8>,
    #[serde(default)]
    pub max_results: Option<usize>,
    #[serde(default)]
    pub filters: Option<RecipeFilters>,
    /// Run semantic expansion over the catalog before scoring.
    #[serde(default = "default_expand")]
    pub expand: bool,
}

impl MatchRequest {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            min_match_percentage: None,
            max_results: None,
            filters: None,
            expand: true,
        }
    }

    pub fn with_min_match_percentage(mut self, min: u8) -> Self {
        self.min_match_percentage = Some(min);
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    pub fn with_filters(mut self, filters: RecipeFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }
}

/// Ranked matches for one request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResponse {
    pub matches: Vec<MatchResult>,
    pub total_results: usize,
}

/// An already-published recipe that a submission is compared against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExistingRecipe {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub ingredient_names: Vec<String>,
}

impl ExistingRecipe {
    pub fn new<I, S>(title: impl Into<String>, ingredient_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            title: title.into(),
            ingredient_names: ingredient_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl From<&RecipeCandidate> for ExistingRecipe {
    fn from(recipe: &RecipeCandidate) -> Self {
        Self {
            id: Some(recipe.id.clone()),
            title: recipe.title.clone(),
            ingredient_names: recipe.ingredients.iter().map(|i| i.name.clone()).collect(),
        }
    }
}

/// The existing recipe a submission collided with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuplicateMatch {
    pub recipe_id: Option<String>,
    pub title: String,
    pub title_distance: usize,
    pub ingredient_overlap: f64,
}

/// Outcome of a duplicate check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum DuplicateVerdict {
    Unique,
    Duplicate(DuplicateMatch),
}

impl DuplicateVerdict {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, DuplicateVerdict::Duplicate(_))
    }

    pub fn duplicate(&self) -> Option<&DuplicateMatch> {
        match self {
            DuplicateVerdict::Duplicate(found) => Some(found),
            DuplicateVerdict::Unique => None,
        }
    }

    /// Turn a positive verdict into [`MatchError::DuplicateRecipe`] for
    /// submission flows that reject duplicates outright.
    pub fn into_result(self) -> Result<(), MatchError> {
        match self {
            DuplicateVerdict::Unique => Ok(()),
            DuplicateVerdict::Duplicate(found) => {
                Err(MatchError::DuplicateRecipe { title: found.title })
            }
        }
    }
}
