/// Normalize a symptom term for matching: trim whitespace, lowercase.
///
/// Applied to both user input and dataset slots so that no comparison is
/// ever case- or whitespace-sensitive.
#[must_use]
pub fn normalize_symptom(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A symptom list prepared for matching.
///
/// Callers are expected to drop blank entries before building a query (both
/// the CLI and the HTTP layer do), but the query itself keeps whatever it is
/// given: the confidence denominator is the full term count, matching the
/// upstream contract.
#[derive(Debug, Clone)]
pub struct SymptomQuery {
    /// Normalized terms in original input order (duplicates kept)
    pub terms: Vec<String>,
}

impl SymptomQuery {
    pub fn new(symptoms: &[String]) -> Self {
        Self {
            terms: symptoms.iter().map(|s| normalize_symptom(s)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symptom() {
        assert_eq!(normalize_symptom("  FEVER "), "fever");
        assert_eq!(normalize_symptom("Sore Throat"), "sore throat");
        assert_eq!(normalize_symptom("   "), "");
    }

    #[test]
    fn test_query_preserves_order_and_duplicates() {
        let input = vec![
            "Cough".to_string(),
            "FEVER".to_string(),
            "cough".to_string(),
        ];
        let query = SymptomQuery::new(&input);
        assert_eq!(query.terms, vec!["cough", "fever", "cough"]);
        assert_eq!(query.len(), 3);
    }
}
