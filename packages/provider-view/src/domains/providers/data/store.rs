//! Record store - the session's read-only source of provider records

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::ProviderId;
use crate::domains::providers::models::ProviderRecord;
use crate::error::{Result, ViewError};

const SAMPLE_PROVIDERS: &str = include_str!("sample_providers.json");

/// Immutable, ordered sequence of provider records.
///
/// Insertion order is the "unsorted" order of the table. Identifiers are
/// unique; construction fails otherwise.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ProviderRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<ProviderRecord>) -> Result<Self> {
        if let Some(duplicate) = first_duplicate(&records) {
            return Err(ViewError::DuplicateId(duplicate.to_string()));
        }

        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ProviderRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load records from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| ViewError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        info!(count = store.len(), path = %path.display(), "Loaded provider records");
        Ok(store)
    }

    /// The built-in demo dataset.
    pub fn sample() -> Result<Self> {
        let store = Self::from_json_str(SAMPLE_PROVIDERS)?;
        info!(count = store.len(), "Loaded sample provider records");
        Ok(store)
    }

    /// Load from `path` when given, otherwise fall back to the sample dataset.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::sample(),
        }
    }

    pub fn records(&self) -> &[ProviderRecord] {
        &self.records
    }

    pub fn get(&self, id: &ProviderId) -> Option<&ProviderRecord> {
        find_record(&self.records, id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Look up one record by id in store order.
pub fn find_record<'a>(
    records: &'a [ProviderRecord],
    id: &ProviderId,
) -> Option<&'a ProviderRecord> {
    records.iter().find(|record| &record.id == id)
}

fn first_duplicate(records: &[ProviderRecord]) -> Option<&ProviderId> {
    let mut seen: HashSet<&ProviderId> = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|record| &record.id)
        .find(|id| !seen.insert(*id))
}
