use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::record::DiseaseRecord;
use crate::dataset::seed::seed_records;
use crate::parsing::table::{parse_table_file, ParseError};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    ParseError(#[from] ParseError),

    #[error("Failed to serialize dataset: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Table format version for exported JSON
pub const TABLE_VERSION: &str = "1.0.0";

/// Serializable export envelope for a disease table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData {
    pub version: String,
    pub created_at: String,
    pub diseases: Vec<DiseaseRecord>,
}

/// Where a loaded table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Loaded from a dataset file on disk
    File(PathBuf),
    /// Built from the embedded fallback seed
    EmbeddedSeed,
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::EmbeddedSeed => write!(f, "embedded seed"),
        }
    }
}

/// The disease table a matcher scores against.
///
/// Loaded once at construction and immutable afterwards; there is no
/// mutation API. Duplicate disease names are kept as separate rows.
#[derive(Debug)]
pub struct DiseaseTable {
    records: Vec<DiseaseRecord>,
    source: TableSource,
}

impl DiseaseTable {
    /// Load a table from a delimited dataset file.
    ///
    /// The delimiter is chosen from the file extension (`.tsv` gets tabs,
    /// everything else commas).
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, DatasetError> {
        let delimiter = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => '\t',
            _ => ',',
        };
        let records = parse_table_file(path, delimiter)?;
        Ok(Self {
            records,
            source: TableSource::File(path.to_path_buf()),
        })
    }

    /// Build the fixed 12-disease fallback table from embedded constants.
    #[must_use]
    pub fn fallback_seed() -> Self {
        Self {
            records: seed_records(),
            source: TableSource::EmbeddedSeed,
        }
    }

    /// Load a table from `path`, falling back to the embedded seed if the
    /// file is missing or unreadable. Never fails and never returns an
    /// empty table.
    #[must_use]
    pub fn load_or_fallback(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(table) => {
                tracing::info!(
                    path = %path.display(),
                    records = table.len(),
                    "loaded disease table"
                );
                table
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "dataset unavailable, using embedded seed table"
                );
                Self::fallback_seed()
            }
        }
    }

    /// All records in dataset order
    #[must_use]
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    /// Where this table was loaded from
    #[must_use]
    pub fn source(&self) -> &TableSource {
        &self.source
    }

    /// Find records by name (case-insensitive). May return several entries
    /// since the table is not deduplicated.
    pub fn find_by_name<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a DiseaseRecord> {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .filter(move |r| r.name.to_lowercase() == needle)
    }

    /// Export the table to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::SerializeError` on serialization failure.
    pub fn to_json(&self) -> Result<String, DatasetError> {
        let data = TableData {
            version: TABLE_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            diseases: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of records in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
