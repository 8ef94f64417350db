//! # Types Module
//!
//! This module defines the core data structures shared by the grading pipeline:
//! the severity tier derived from a similarity score, the synthesized feedback,
//! and where a reference answer comes from.

use serde::{Deserialize, Serialize};

/// Severity tier derived from banding the similarity score.
///
/// Drives both the tone of the feedback narrative and how it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Bands a similarity score. Both cut points use strict greater-than.
    ///
    /// NaN compares false against every threshold and lands in [`Severity::Low`].
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            Severity::High
        } else if score > 0.6 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Fixed display treatment for each tier.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::High => "bg-green-100 text-green-600",
            Severity::Medium => "bg-yellow-100 text-yellow-600",
            Severity::Low => "bg-red-100 text-red-600",
        }
    }
}

/// Narrative feedback plus its severity tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    /// Base message, then a Strengths block, then a Weaknesses block, separated by `<br>` markup.
    pub text: String,
    pub severity: Severity,
}

/// Where the reference answer for a grading job comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceSource {
    /// Reference supplied by the user.
    Manual(String),
    /// Reference produced by the configured [`ReferenceProvider`](crate::traits::reference_provider::ReferenceProvider).
    Generated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banding_uses_strict_cut_points() {
        assert_eq!(Severity::from_score(0.8000001), Severity::High);
        assert_eq!(Severity::from_score(0.8), Severity::Medium);
        assert_eq!(Severity::from_score(0.6000001), Severity::Medium);
        assert_eq!(Severity::from_score(0.6), Severity::Low);
    }

    #[test]
    fn out_of_range_scores_still_band() {
        assert_eq!(Severity::from_score(1.5), Severity::High);
        assert_eq!(Severity::from_score(-0.3), Severity::Low);
        assert_eq!(Severity::from_score(f64::NAN), Severity::Low);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn each_tier_has_a_distinct_class() {
        let classes = [
            Severity::High.css_class(),
            Severity::Medium.css_class(),
            Severity::Low.css_class(),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert!(classes[0].contains("green"));
        assert!(classes[2].contains("red"));
    }
}
