//! JSON fixtures bundling a catalog snapshot with the recipes to search.

use std::fs;
use std::path::Path;

use matcher::{ExistingRecipe, InMemoryCatalog, IngredientRecord, RecipeCandidate, embed_catalog};
use semantic::{EmbeddingProvider, SemanticError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to embed fixture catalog: {0}")]
    Embed(#[from] SemanticError),
}

/// A catalog snapshot plus a recipe corpus.
///
/// ```json
/// {
///   "catalog": [{ "name": "Green Onion", "aliases": ["scallion"] }],
///   "recipes": [{ "id": "r1", "title": "Fried Rice", "ingredients": [] }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    #[serde(default)]
    pub catalog: Vec<IngredientRecord>,
    #[serde(default)]
    pub recipes: Vec<RecipeCandidate>,
}

impl Fixture {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embed catalog records that arrived without a vector.
    pub fn embed(&mut self, provider: &dyn EmbeddingProvider) -> Result<usize, FixtureError> {
        let filled = embed_catalog(provider, &mut self.catalog)?;
        debug!(filled, total = self.catalog.len(), "fixture_catalog_embedded");
        Ok(filled)
    }

    pub fn in_memory_catalog(&self) -> InMemoryCatalog {
        InMemoryCatalog::new(self.catalog.clone())
    }

    /// The recipe corpus as duplicate-check candidates.
    pub fn existing_recipes(&self) -> Vec<ExistingRecipe> {
        self.recipes.iter().map(ExistingRecipe::from).collect()
    }
}
