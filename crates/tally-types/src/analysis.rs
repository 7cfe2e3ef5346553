use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed three-value risk classification attached to every analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    /// Result sits comfortably inside normal bounds.
    Low,
    /// Result warrants attention before acting on it.
    Medium,
    /// Result is outside safe bounds or highly sensitive to its inputs.
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Qualitative companion to a numeric result: a human-readable
/// recommendation plus a [`RiskLevel`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Analysis {
    /// Free-text recommendation for the caller.
    pub recommendation: String,
    /// Risk classification of the computed result.
    pub risk_level: RiskLevel,
}

impl Analysis {
    /// Creates a new `Analysis`.
    pub fn new(risk_level: RiskLevel, recommendation: impl Into<String>) -> Self {
        Self { recommendation: recommendation.into(), risk_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn risk_level_serializes_as_capitalized_string() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"Medium\"");
        let parsed: RiskLevel = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(parsed, RiskLevel::High);
    }

    #[test]
    fn analysis_round_trips_through_json() {
        let analysis = Analysis::new(RiskLevel::Low, "Proceed as planned.");
        let json = serde_json::to_string(&analysis).unwrap();
        let back: Analysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}
