//! Core data types for symptom-to-disease matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`DiseaseRecord`](record::DiseaseRecord): a disease row with its characteristic symptom set
//! - [`SymptomQuery`](query::SymptomQuery): a normalized user symptom list
//! - [`Severity`](types::Severity): the coarse Low/Medium/High band derived from confidence
//!
//! ## Normalization
//!
//! All matching is done on normalized terms (trimmed, lowercased). Input
//! symptoms and dataset slots are normalized identically, so `"FEVER"`,
//! `" fever "` and `"fever"` are the same term everywhere.

pub mod query;
pub mod record;
pub mod types;
