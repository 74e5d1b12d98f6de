//! Core record types for the risk dataset.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Qualitative risk classification for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Display label as it appears in legends and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Canonical color for this level (green / yellow / red).
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::Medium => Color::Yellow,
            Self::High => Color::Red,
        }
    }

    /// All levels in ascending order, for legend rendering.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single assessed feature in the risk dataset.
///
/// Invariants: `severity` is in 1..=5, `probability` is in 0.0..=1.0 and
/// `score` is non-negative. The builtin table upholds these by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    /// Short identifier ("A".."J" in the builtin dataset).
    pub id: String,
    /// Severity level, 1 (negligible) to 5 (critical).
    pub severity: u8,
    /// Probability of the issue occurring, 0.0 to 1.0.
    pub probability: f64,
    /// Impact score (severity weighted by probability).
    pub score: f64,
    /// Qualitative classification.
    pub risk_level: RiskLevel,
}

impl RiskRecord {
    pub(crate) fn new(
        id: &str,
        severity: u8,
        probability: f64,
        score: f64,
        risk_level: RiskLevel,
    ) -> Self {
        debug_assert!((1..=5).contains(&severity), "severity out of range");
        debug_assert!((0.0..=1.0).contains(&probability), "probability out of range");
        debug_assert!(score >= 0.0, "negative score");
        Self {
            id: id.to_string(),
            severity,
            probability,
            score,
            risk_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_labels() {
        assert_eq!(RiskLevel::Low.label(), "Low");
        assert_eq!(RiskLevel::Medium.label(), "Medium");
        assert_eq!(RiskLevel::High.label(), "High");
    }

    #[test]
    fn test_risk_level_colors() {
        assert_eq!(RiskLevel::Low.color(), Color::Green);
        assert_eq!(RiskLevel::Medium.color(), Color::Yellow);
        assert_eq!(RiskLevel::High.color(), Color::Red);
    }

    #[test]
    fn test_risk_level_serde_roundtrip() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: RiskLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RiskLevel::Medium);
    }
}
