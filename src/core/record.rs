use serde::{Deserialize, Serialize};

use crate::core::query::normalize_symptom;

/// Default description for records whose dataset row has none
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Default treatment for records whose dataset row has none
pub const DEFAULT_TREATMENT: &str = "Consult healthcare professional";

/// A single disease row from the symptom table.
///
/// Records are fixed-shape values: a name, the characteristic symptoms from
/// the non-empty `Symptom_N` slots, and advisory text. Duplicate names in
/// the source data are kept as separate records - the table never merges or
/// deduplicates rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Disease name as it appears in the dataset
    pub name: String,

    /// Characteristic symptoms, original casing, empty slots dropped
    pub symptoms: Vec<String>,

    /// Free-text description of the condition
    pub description: String,

    /// Free-text advisory treatment text
    pub treatment: String,

    // === Pre-computed for matching (populated on load) ===
    /// Normalized (trimmed, lowercased) symptom terms in slot order
    #[serde(skip)]
    pub symptom_terms: Vec<String>,
}

impl DiseaseRecord {
    pub fn new(
        name: impl Into<String>,
        symptoms: Vec<String>,
        description: impl Into<String>,
        treatment: impl Into<String>,
    ) -> Self {
        let mut record = Self {
            name: name.into(),
            symptoms,
            description: description.into(),
            treatment: treatment.into(),
            symptom_terms: Vec::new(),
        };
        record.rebuild_terms();
        record
    }

    /// Rebuild the normalized term list after deserializing or modifying
    /// `symptoms`. Empty slots are dropped here so scoring never sees them.
    pub fn rebuild_terms(&mut self) {
        self.symptom_terms = self
            .symptoms
            .iter()
            .map(|s| normalize_symptom(s))
            .filter(|s| !s.is_empty())
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_are_normalized_on_construction() {
        let record = DiseaseRecord::new(
            "Influenza",
            vec!["  Fever ".to_string(), "Body Aches".to_string()],
            "Respiratory illness",
            "Rest and fluids",
        );
        assert_eq!(record.symptom_terms, vec!["fever", "body aches"]);
        // Original casing is preserved for display
        assert_eq!(record.symptoms[1], "Body Aches");
    }

    #[test]
    fn test_empty_slots_are_dropped_from_terms() {
        let record = DiseaseRecord::new(
            "Migraine",
            vec!["headache".to_string(), "  ".to_string(), String::new()],
            DEFAULT_DESCRIPTION,
            DEFAULT_TREATMENT,
        );
        assert_eq!(record.symptom_terms, vec!["headache"]);
    }
}
