use std::collections::HashMap;
use std::io::Read;

use canonical::{normalize_name, CanonicalizeConfig};
use semantic::{ensure_dimension, EmbeddingProvider, SemanticError};
use tracing::debug;

use crate::error::CatalogError;
use crate::types::IngredientRecord;

/// Read access to the ingredient catalog.
///
/// Storage I/O happens behind this trait, before the matcher runs. The
/// matcher never writes.
pub trait IngredientCatalog: Send + Sync {
    /// Every catalog ingredient.
    fn find_all(&self) -> Result<Vec<IngredientRecord>, CatalogError>;

    /// Exact canonical-name lookup, ignoring case and surrounding whitespace.
    fn find_by_name(&self, name: &str) -> Result<Option<IngredientRecord>, CatalogError>;
}

/// Catalog held in memory, indexed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<IngredientRecord>,
    by_name: HashMap<String, usize>,
    canonical: CanonicalizeConfig,
}

impl InMemoryCatalog {
    pub fn new(records: Vec<IngredientRecord>) -> Self {
        let mut catalog = Self {
            records,
            by_name: HashMap::new(),
            canonical: CanonicalizeConfig::default(),
        };
        catalog.reindex();
        catalog
    }

    /// Key names with `canonical` instead of the default rules. Use the
    /// matcher's config so lookups agree with in-memory expansion.
    pub fn with_canonical_config(mut self, canonical: CanonicalizeConfig) -> Self {
        self.canonical = canonical;
        self.reindex();
        self
    }

    fn reindex(&mut self) {
        self.by_name.clear();
        self.by_name.reserve(self.records.len());
        for (idx, record) in self.records.iter().enumerate() {
            // First record wins on name collisions.
            self.by_name
                .entry(normalize_name(&record.name, &self.canonical))
                .or_insert(idx);
        }
    }

    /// Parse a JSON array of [`IngredientRecord`]s.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<IngredientRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Ok(Self::new(records))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<IngredientRecord> =
            serde_json::from_reader(reader).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[IngredientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fill in embeddings for records that lack one. Returns how many were
    /// computed.
    pub fn embed_missing(&mut self, provider: &dyn EmbeddingProvider) -> Result<usize, SemanticError> {
        embed_catalog(provider, &mut self.records)
    }
}

impl IngredientCatalog for InMemoryCatalog {
    fn find_all(&self) -> Result<Vec<IngredientRecord>, CatalogError> {
        Ok(self.records.clone())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<IngredientRecord>, CatalogError> {
        let key = normalize_name(name, &self.canonical);
        Ok(self.by_name.get(&key).map(|&idx| self.records[idx].clone()))
    }
}

/// Compute embeddings for every record without one, in a single
/// `embed_batch` call over the normalized names.
///
/// Records that already carry a non-empty embedding are left alone. Returns
/// the number of records filled.
pub fn embed_catalog(
    provider: &dyn EmbeddingProvider,
    records: &mut [IngredientRecord],
) -> Result<usize, SemanticError> {
    let cfg = CanonicalizeConfig::default();
    let pending: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| !record.has_embedding())
        .map(|(idx, _)| idx)
        .collect();
    if pending.is_empty() {
        return Ok(0);
    }

    let names: Vec<String> = pending
        .iter()
        .map(|&idx| normalize_name(&records[idx].name, &cfg))
        .collect();
    let texts: Vec<&str> = names.iter().map(String::as_str).collect();
    let vectors = provider.embed_batch(&texts)?;
    if vectors.len() != pending.len() {
        return Err(SemanticError::Provider(format!(
            "embed_batch returned {} vectors for {} inputs",
            vectors.len(),
            pending.len()
        )));
    }

    // Validate the whole batch first so a bad vector leaves every record untouched.
    for vector in &vectors {
        ensure_dimension(provider, vector)?;
    }
    for (&idx, vector) in pending.iter().zip(vectors) {
        records[idx].embedding = Some(vector);
    }

    debug!(
        model = provider.model_name(),
        embedded = pending.len(),
        "catalog_embedded"
    );
    Ok(pending.len())
}
