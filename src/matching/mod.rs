//! Symptom-to-disease matching engine and scoring.
//!
//! This module provides the algorithmic core:
//!
//! - [`Matcher`](engine::Matcher): scores input symptoms against the loaded table
//! - [`confidence_score`](scoring::confidence_score): per-disease overlap scoring
//! - [`general_recommendations`](advisory::general_recommendations): the advisory fallback pair
//!
//! ## Scoring
//!
//! For each user symptom, the disease's terms are scanned in slot order for
//! the first hit: an exact term match contributes 1.0, a substring match
//! (in either direction) contributes 0.7. The total is averaged over the
//! input length and expressed as a 0-100 confidence, and severity is derived
//! from fixed confidence thresholds.
//!
//! ## Fallback policy
//!
//! Diseases with zero confidence are excluded; if nothing remains or the
//! best candidate scores below 20, the ranked list is replaced wholesale by
//! two fixed advisory entries. The engine never returns an error and never
//! returns an empty list.
//!
//! ## Example
//!
//! ```rust
//! use medmatch::{DiseaseTable, Matcher};
//!
//! let matcher = Matcher::new(DiseaseTable::fallback_seed());
//! let prediction = matcher.predict(&["fever".to_string(), "fatigue".to_string()]);
//!
//! for m in &prediction.diseases {
//!     println!("{}: {:.2}% ({})", m.name, m.confidence, m.severity);
//! }
//! ```

pub mod advisory;
pub mod engine;
pub mod scoring;
