use serde::{Deserialize, Serialize};

/// Confidence threshold at or above which a match is considered high severity
pub const HIGH_SEVERITY_CUTOFF: f64 = 70.0;

/// Confidence threshold at or above which a match is considered medium severity
pub const MEDIUM_SEVERITY_CUTOFF: f64 = 40.0;

/// Coarse severity band derived from a confidence score.
///
/// Severity is always a pure function of confidence; it is never set
/// independently. Serialized as `"Low"` / `"Medium"` / `"High"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Derive the severity band for a 0-100 confidence score.
    ///
    /// The cutoffs (70 and 40) are tunable constants carried over from the
    /// original tool for output compatibility.
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= HIGH_SEVERITY_CUTOFF {
            Self::High
        } else if confidence >= MEDIUM_SEVERITY_CUTOFF {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}
