use std::sync::Arc;
use std::time::Instant;

use canonical::{normalize_name, normalize_names, CanonicalizeConfig, IngredientSet};
use rayon::prelude::*;
use semantic::EmbeddingProvider;
use similarity::cosine_similarity;
use tracing::debug;

use crate::catalog::IngredientCatalog;
use crate::config::ExpansionConfig;
use crate::error::MatchError;
use crate::metrics::metrics_recorder;
use crate::types::IngredientRecord;

/// Widens a user's ingredient list with catalog names that are either
/// embedding-similar or exact-name aliases.
///
/// For each normalized user ingredient `u`:
///
/// 1. every catalog record whose embedding has cosine similarity
///    `>= similarity_threshold` with `embed(u)` contributes its name;
/// 2. a record named exactly `u` contributes its name and aliases;
/// 3. `u` itself is always kept.
///
/// Records whose embedding dimension differs from the provider's are skipped,
/// never fatal.
#[derive(Clone)]
pub struct SemanticExpander {
    provider: Arc<dyn EmbeddingProvider>,
    canonical: CanonicalizeConfig,
    config: ExpansionConfig,
}

impl SemanticExpander {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            provider,
            canonical: CanonicalizeConfig::default(),
            config: ExpansionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExpansionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_canonical_config(mut self, canonical: CanonicalizeConfig) -> Self {
        self.canonical = canonical;
        self
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    pub fn provider(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.provider
    }

    /// Expand against a catalog snapshot already in memory.
    pub fn expand<S: AsRef<str>>(
        &self,
        user: &[S],
        catalog: &[IngredientRecord],
    ) -> Result<IngredientSet, MatchError> {
        self.expand_inner(user, catalog, |name| Ok(self.find_named(catalog, name).cloned()))
    }

    /// Expand against a catalog collaborator: one `find_all` for the
    /// similarity scan, `find_by_name` per user ingredient for aliases.
    ///
    /// The catalog may key names differently from this expander's
    /// [`CanonicalizeConfig`]. A `find_by_name` hit is kept only when its name
    /// normalizes to the user ingredient; otherwise the `find_all` snapshot is
    /// scanned, so both expansion paths agree.
    pub fn expand_with_catalog<S: AsRef<str>>(
        &self,
        user: &[S],
        catalog: &dyn IngredientCatalog,
    ) -> Result<IngredientSet, MatchError> {
        let records = catalog.find_all()?;
        self.expand_inner(user, &records, |name| {
            let hit = catalog
                .find_by_name(name)?
                .filter(|record| normalize_name(&record.name, &self.canonical) == name);
            Ok(hit.or_else(|| self.find_named(&records, name).cloned()))
        })
    }

    fn find_named<'a>(&self, records: &'a [IngredientRecord], name: &str) -> Option<&'a IngredientRecord> {
        records
            .iter()
            .find(|record| normalize_name(&record.name, &self.canonical) == name)
    }

    fn expand_inner<S, F>(
        &self,
        user: &[S],
        catalog: &[IngredientRecord],
        lookup: F,
    ) -> Result<IngredientSet, MatchError>
    where
        S: AsRef<str>,
        F: Fn(&str) -> Result<Option<IngredientRecord>, MatchError>,
    {
        let start = Instant::now();
        let normalized = normalize_names(user, &self.canonical);
        if normalized.is_empty() {
            return Ok(normalized);
        }

        let texts: Vec<&str> = normalized.iter().map(String::as_str).collect();
        let queries = self.provider.embed_batch(&texts)?;

        let mut expanded = normalized.clone();
        for (name, query) in normalized.iter().zip(&queries) {
            expanded.extend(self.similar_names(name, query, catalog));

            if let Some(record) = lookup(name)? {
                self.insert_name(&mut expanded, &record.name);
                if self.config.include_aliases {
                    for alias in &record.aliases {
                        self.insert_name(&mut expanded, alias);
                    }
                }
            }
        }

        let latency = start.elapsed();
        debug!(
            input = normalized.len(),
            expanded = expanded.len(),
            catalog = catalog.len(),
            elapsed_micros = latency.as_micros() as u64,
            "expansion_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_expansion(normalized.len(), expanded.len(), latency);
        }

        Ok(expanded)
    }

    fn similar_names(&self, name: &str, query: &[f32], catalog: &[IngredientRecord]) -> Vec<String> {
        let threshold = self.config.similarity_threshold;
        let check = |record: &IngredientRecord| -> Option<String> {
            let embedding = record.embedding.as_deref().filter(|e| !e.is_empty())?;
            match cosine_similarity(query, embedding) {
                Ok(sim) if sim >= threshold => {
                    let candidate = normalize_name(&record.name, &self.canonical);
                    if candidate.is_empty() {
                        return None;
                    }
                    debug!(query = name, ingredient = %candidate, similarity = sim, "semantic_hit");
                    Some(candidate)
                }
                Ok(_) => None,
                Err(err) => {
                    debug!(
                        query = name,
                        ingredient = %record.name,
                        error = %err,
                        "expansion_entry_skipped"
                    );
                    None
                }
            }
        };

        if self.config.use_parallel {
            catalog.par_iter().filter_map(check).collect()
        } else {
            catalog.iter().filter_map(check).collect()
        }
    }

    fn insert_name(&self, set: &mut IngredientSet, raw: &str) {
        let name = normalize_name(raw, &self.canonical);
        if !name.is_empty() {
            set.insert(name);
        }
    }
}

impl std::fmt::Debug for SemanticExpander {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticExpander")
            .field("model", &self.provider.model_name())
            .field("config", &self.config)
            .finish()
    }
}
