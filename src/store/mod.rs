//! Load-once, read-only store for the placement dataset.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::company::CompanyRecord;

/// Root shape of the placement data document.
#[derive(Debug, Deserialize)]
struct PlacementData {
    #[serde(default)]
    companies: Vec<CompanyRecord>,
}

/// Immutable in-memory collection of company records.
///
/// Built once at startup and shared by reference; there is no update or
/// deletion path, so every read is safe without synchronization.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<CompanyRecord>,
}

impl RecordStore {
    /// Load the dataset from a JSON file. A missing or malformed source is
    /// logged and yields an empty store; the server stays up and reports
    /// zero records everywhere.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let records = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<PlacementData>(&content) {
                Ok(data) => data.companies,
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "Malformed placement data, starting empty");
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Cannot read placement data, starting empty");
                Vec::new()
            }
        };
        Self { records }
    }

    /// Build a store from records already in memory. Used by tests.
    pub fn from_records(records: Vec<CompanyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
