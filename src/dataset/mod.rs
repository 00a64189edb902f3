//! Disease table storage.
//!
//! The table pairs disease names with their characteristic symptom slots and
//! advisory text. It is loaded once from a delimited dataset file; when the
//! file is missing or unreadable, a fixed 12-disease seed table embedded in
//! the binary takes its place so the matcher is never without data.
//!
//! ## Example
//!
//! ```rust
//! use medmatch::DiseaseTable;
//! use std::path::Path;
//!
//! // Never fails: missing file falls back to the embedded seed
//! let table = DiseaseTable::load_or_fallback(Path::new("data/disease_symptom_dataset.csv"));
//! assert!(!table.is_empty());
//! ```

pub mod seed;
pub mod store;
