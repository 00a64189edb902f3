use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::query::SymptomQuery;
use crate::core::types::Severity;
use crate::dataset::store::DiseaseTable;
use crate::matching::advisory::general_recommendations;
use crate::matching::scoring::{confidence_score, matching_symptoms, round3};

/// Ranked lists whose top confidence falls below this are replaced by the
/// advisory fallback pair. Empirically chosen upstream; tunable, not an
/// invariant.
pub const DEFAULT_LOW_CONFIDENCE_CUTOFF: f64 = 20.0;

/// Default number of ranked candidates returned
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// A single ranked disease candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Disease name from the table (or advisory entry title)
    pub name: String,

    /// Confidence score, 0-100, two decimals
    pub confidence: f64,

    /// Description from the table row
    pub description: String,

    /// Advisory treatment text from the table row
    pub treatment: String,

    /// Severity band derived from the confidence score
    pub severity: Severity,

    /// Input symptoms that contributed to the score, input order, deduplicated
    pub matching_symptoms: Vec<String>,
}

/// Result of one `predict` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Ranked candidates (at most the result limit, or exactly the advisory
    /// pair in fallback mode)
    pub diseases: Vec<MatchResult>,

    /// Wall-clock seconds spent scoring, three decimals
    pub processing_time: f64,
}

/// Configuration for the matcher
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Maximum number of ranked candidates to return
    pub result_limit: usize,

    /// Top-confidence threshold below which the advisory fallback replaces
    /// the ranked list
    pub low_confidence_cutoff: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            low_confidence_cutoff: DEFAULT_LOW_CONFIDENCE_CUTOFF,
        }
    }
}

/// The symptom-to-disease matcher.
///
/// Owns its disease table for the lifetime of the matching session; the
/// table is never mutated after construction, so concurrent `predict` calls
/// need no coordination. Construct once and share (e.g. behind an `Arc`)
/// rather than keeping ambient global state.
pub struct Matcher {
    table: DiseaseTable,
    config: MatcherConfig,
}

impl Matcher {
    /// Create a matcher with the default configuration
    #[must_use]
    pub fn new(table: DiseaseTable) -> Self {
        Self {
            table,
            config: MatcherConfig::default(),
        }
    }

    /// Create a matcher with a custom configuration
    #[must_use]
    pub fn with_config(table: DiseaseTable, config: MatcherConfig) -> Self {
        Self { table, config }
    }

    /// The table this matcher scores against
    #[must_use]
    pub fn table(&self) -> &DiseaseTable {
        &self.table
    }

    /// Score the input symptoms against every disease in the table and
    /// return ranked candidates.
    ///
    /// Pure over the loaded table and the input list: identical input yields
    /// identical output, and there is no dependency on prior calls. The call
    /// never fails - empty or unmatched input degrades to the advisory
    /// fallback pair rather than an error.
    #[must_use]
    pub fn predict(&self, symptoms: &[String]) -> Prediction {
        let started = Instant::now();
        let query = SymptomQuery::new(symptoms);

        let mut candidates: Vec<MatchResult> = Vec::new();
        for record in self.table.records() {
            let confidence = confidence_score(&query.terms, &record.symptom_terms);
            // Zero-confidence diseases are excluded entirely, not ranked last
            if confidence > 0.0 {
                candidates.push(MatchResult {
                    name: record.name.clone(),
                    confidence,
                    description: record.description.clone(),
                    treatment: record.treatment.clone(),
                    severity: Severity::from_confidence(confidence),
                    matching_symptoms: matching_symptoms(&query.terms, &record.symptom_terms),
                });
            }
        }

        // Stable sort: equal confidence keeps dataset order
        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(self.config.result_limit);

        let below_cutoff = candidates
            .first()
            .map_or(true, |top| top.confidence < self.config.low_confidence_cutoff);
        if below_cutoff {
            candidates = general_recommendations(&query.terms);
        }

        Prediction {
            diseases: candidates,
            processing_time: round3(started.elapsed().as_secs_f64()),
        }
    }
}
