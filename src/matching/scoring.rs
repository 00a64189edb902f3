/// Weight of an exact term match toward the confidence score
pub const EXACT_MATCH_WEIGHT: f64 = 1.0;

/// Weight of a partial (substring) term match toward the confidence score
pub const PARTIAL_MATCH_WEIGHT: f64 = 0.7;

/// Safely convert usize to f64 for percentage calculations
///
/// Symptom list lengths are tiny, so the usize-to-f64 precision loss this
/// silences can never occur in practice.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// How a user term matched a disease term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TermMatch {
    Exact,
    Partial,
}

/// Scan the disease terms in slot order for the first one matching `user`.
///
/// Each candidate term is tried for an exact match first, then for a
/// substring match in either direction; the first hit wins and scanning
/// stops. A substring hit on an earlier slot therefore beats an exact hit
/// on a later one, matching the upstream scorer.
fn match_term(user: &str, disease_terms: &[String]) -> Option<TermMatch> {
    for term in disease_terms {
        if user == term {
            return Some(TermMatch::Exact);
        }
        if term.contains(user) || user.contains(term) {
            return Some(TermMatch::Partial);
        }
    }
    None
}

/// Confidence score (0-100, two decimals) for a disease's symptom terms
/// against normalized user terms.
///
/// Each user term contributes [`EXACT_MATCH_WEIGHT`] for an exact hit or
/// [`PARTIAL_MATCH_WEIGHT`] for a substring hit; the total is divided by the
/// user term count. Empty input on either side scores 0.
#[must_use]
pub fn confidence_score(user_terms: &[String], disease_terms: &[String]) -> f64 {
    if user_terms.is_empty() || disease_terms.is_empty() {
        return 0.0;
    }

    let mut total_matches = 0.0;
    for user in user_terms {
        match match_term(user, disease_terms) {
            Some(TermMatch::Exact) => total_matches += EXACT_MATCH_WEIGHT,
            Some(TermMatch::Partial) => total_matches += PARTIAL_MATCH_WEIGHT,
            None => {}
        }
    }

    let confidence = (total_matches / count_to_f64(user_terms.len())) * 100.0;
    round2(confidence.min(100.0))
}

/// User terms that contributed to the score for a disease, in original
/// input order with duplicates removed.
#[must_use]
pub fn matching_symptoms(user_terms: &[String], disease_terms: &[String]) -> Vec<String> {
    let mut matches: Vec<String> = Vec::new();
    for user in user_terms {
        if match_term(user, disease_terms).is_some() && !matches.iter().any(|m| m == user) {
            matches.push(user.clone());
        }
    }
    matches
}

/// Round to two decimal places (confidence values)
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to three decimal places (elapsed seconds)
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
