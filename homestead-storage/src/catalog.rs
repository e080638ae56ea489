//! In-memory property catalog
//!
//! The catalog owns the listing collection supplied at startup and answers
//! read queries over it. It is constructed explicitly and handed to
//! callers; there is no process-wide listing table.

use homestead_core::config::DEFAULT_FEATURED_LIMIT;
use homestead_core::{
    CatalogError, ConfigError, FilterSpec, HomesteadConfig, HomesteadResult, PropertyId,
    PropertyQueryEngine, PropertyRecord,
};
use std::collections::HashSet;
use std::path::Path;

/// Read-only collection of listings, in dataset order.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    records: Vec<PropertyRecord>,
    engine: PropertyQueryEngine,
    featured_limit: usize,
}

impl PropertyCatalog {
    /// Build a catalog from records in dataset order.
    /// Fails if two records share an identifier.
    pub fn new(records: Vec<PropertyRecord>) -> HomesteadResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                tracing::warn!(id = %record.id, "duplicate property id in catalog data");
                return Err(CatalogError::DuplicateId { id: record.id }.into());
            }
        }
        tracing::info!(count = records.len(), "property catalog loaded");
        Ok(Self {
            records,
            engine: PropertyQueryEngine::new(),
            featured_limit: DEFAULT_FEATURED_LIMIT,
        })
    }

    /// Parse a JSON array of listings.
    pub fn from_json_str(json: &str) -> HomesteadResult<Self> {
        let records: Vec<PropertyRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::InvalidData {
                reason: e.to_string(),
            })?;
        Self::new(records)
    }

    /// Read and parse a JSON dataset file.
    pub fn from_json_file(path: &Path) -> HomesteadResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    /// Validate `config`, load the dataset named by `config.dataset_path`
    /// and apply the configured featured limit.
    pub fn from_config(config: &HomesteadConfig) -> HomesteadResult<Self> {
        config.validate()?;
        let path = config
            .dataset_path
            .as_deref()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "dataset_path".to_string(),
                value: "none".to_string(),
                reason: "dataset_path is required to load the catalog".to_string(),
            })?;
        Ok(Self::from_json_file(path)?.with_featured_limit(config.featured_limit))
    }

    /// Override the featured listings cap.
    pub fn with_featured_limit(mut self, featured_limit: usize) -> Self {
        self.featured_limit = featured_limit;
        self
    }

    pub fn featured_limit(&self) -> usize {
        self.featured_limit
    }

    /// All listings, in dataset order.
    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of the listings matching `spec`, in dataset order.
    pub fn search(&self, spec: &FilterSpec) -> Vec<PropertyRecord> {
        self.engine.evaluate_owned(&self.records, spec)
    }

    /// Copy of a single listing.
    pub fn get_by_id(&self, id: PropertyId) -> HomesteadResult<PropertyRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::PropertyNotFound { id }.into())
    }

    /// Featured listings in dataset order, capped at the featured limit.
    pub fn get_featured(&self) -> Vec<PropertyRecord> {
        self.records
            .iter()
            .filter(|r| r.status.is_featured())
            .take(self.featured_limit)
            .cloned()
            .collect()
    }

    /// Listings whose id is in `ids`, in dataset order. Unknown ids are
    /// skipped.
    pub fn get_by_ids(&self, ids: &[PropertyId]) -> Vec<PropertyRecord> {
        let wanted: HashSet<PropertyId> = ids.iter().copied().collect();
        self.records
            .iter()
            .filter(|r| wanted.contains(&r.id))
            .cloned()
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
