use crate::core::types::Severity;
use crate::matching::engine::MatchResult;

/// Confidence assigned to the general-consultation advisory entry
pub const CONSULTATION_CONFIDENCE: f64 = 60.0;

/// Confidence assigned to the symptomatic-care advisory entry
pub const SYMPTOMATIC_CARE_CONFIDENCE: f64 = 40.0;

/// The fixed advisory pair substituted when no disease matches well enough.
///
/// Always exactly two entries; when triggered, it fully replaces whatever
/// ranked list existed - it never merges with real candidates. The policy
/// is "never empty-handed": worst case the caller gets generic
/// consult-a-professional advice, not an error.
#[must_use]
pub fn general_recommendations(symptoms: &[String]) -> Vec<MatchResult> {
    let listed: Vec<String> = symptoms.iter().take(3).cloned().collect();

    vec![
        MatchResult {
            name: "General Health Consultation".to_string(),
            confidence: CONSULTATION_CONFIDENCE,
            description: format!(
                "Based on your symptoms ({}), we recommend consulting a healthcare professional for proper evaluation.",
                listed.join(", ")
            ),
            treatment: "Schedule an appointment with your doctor or visit a clinic for professional medical advice.".to_string(),
            severity: Severity::from_confidence(CONSULTATION_CONFIDENCE),
            matching_symptoms: listed,
        },
        MatchResult {
            name: "Symptomatic Care".to_string(),
            confidence: SYMPTOMATIC_CARE_CONFIDENCE,
            description: "General symptomatic care may help while you seek professional medical advice.".to_string(),
            treatment: "Rest, stay hydrated, monitor symptoms, and seek medical attention if symptoms worsen.".to_string(),
            severity: Severity::from_confidence(SYMPTOMATIC_CARE_CONFIDENCE),
            matching_symptoms: symptoms.iter().take(2).cloned().collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptoms(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_advisory_pair_constants() {
        let advice = general_recommendations(&symptoms(&["fever"]));
        assert_eq!(advice.len(), 2);

        assert_eq!(advice[0].name, "General Health Consultation");
        assert_eq!(advice[0].confidence, 60.0);
        assert_eq!(advice[0].severity, Severity::Medium);

        assert_eq!(advice[1].name, "Symptomatic Care");
        assert_eq!(advice[1].confidence, 40.0);
        assert_eq!(advice[1].severity, Severity::Low);
    }

    #[test]
    fn test_advisory_truncates_symptom_lists() {
        let advice = general_recommendations(&symptoms(&["a", "b", "c", "d"]));
        assert_eq!(advice[0].matching_symptoms, symptoms(&["a", "b", "c"]));
        assert_eq!(advice[1].matching_symptoms, symptoms(&["a", "b"]));
        assert!(advice[0].description.contains("a, b, c"));
    }

    #[test]
    fn test_advisory_with_empty_input() {
        let advice = general_recommendations(&[]);
        assert_eq!(advice.len(), 2);
        assert!(advice[0].matching_symptoms.is_empty());
        assert!(advice[1].matching_symptoms.is_empty());
    }
}
