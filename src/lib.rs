//! # medmatch
//!
//! A library for matching patient-reported symptoms against a table of
//! disease records.
//!
//! Given a list of free-text symptoms, medmatch scores every disease in its
//! table by term overlap, ranks the candidates by confidence, and labels
//! each with a coarse severity. When nothing matches well enough it falls
//! back to a fixed pair of general-advice entries, so a caller is never
//! left empty-handed.
//!
//! This is an educational heuristic-matching tool. It is not a medical
//! diagnosis system and makes no claim of clinical accuracy.
//!
//! ## Features
//!
//! - **Overlap scoring**: exact term matches count full weight, substring
//!   matches partial weight, averaged over the input
//! - **Severity bands**: Low/Medium/High derived purely from confidence
//! - **Advisory fallback**: low-confidence results are replaced by fixed
//!   consult-a-professional entries
//! - **Resilient loading**: a missing or unreadable dataset file falls back
//!   to an embedded 12-disease seed table
//!
//! ## Example
//!
//! ```rust
//! use medmatch::{DiseaseTable, Matcher};
//!
//! // Build the matcher from the embedded seed table
//! let matcher = Matcher::new(DiseaseTable::fallback_seed());
//!
//! // Rank candidates for a symptom list
//! let prediction = matcher.predict(&["fever".to_string(), "body aches".to_string()]);
//!
//! for m in &prediction.diseases {
//!     println!("{}: {:.2}% ({})", m.name, m.confidence, m.severity);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Disease records, symptom queries, and severity types
//! - [`dataset`]: Disease table storage with embedded fallback seed
//! - [`matching`]: Scoring engine, ranking, and advisory fallback
//! - [`parsing`]: Delimited dataset file parsing
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON API server for symptom prediction

pub mod cli;
pub mod core;
pub mod dataset;
pub mod matching;
pub mod parsing;
pub mod web;

// Re-export commonly used types for convenience
pub use core::record::DiseaseRecord;
pub use core::types::Severity;
pub use dataset::store::{DiseaseTable, TableSource};
pub use matching::engine::{MatchResult, Matcher, MatcherConfig, Prediction};
