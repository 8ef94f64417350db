//! # AutoFeedback
//!
//! Template-based feedback for a graded answer.
//!
//! ## Overview
//!
//! - The similarity score is banded into a [`Severity`] tier, which picks the base message and seeds
//!   one strength and/or one weakness sentence.
//! - Both answers are reduced to keyword sets. Terms shared by both become a strength sentence, terms
//!   present only in the reference become a weakness sentence. Terms are listed in sorted order.
//! - The final text is always `base`, then a Strengths block, then a Weaknesses block. An empty block
//!   falls back to a "No significant ... noted." sentence.
//!
//! This is a pure function of its inputs and never fails.

use crate::types::{Feedback, Severity};
use crate::utilities::ignore_words::IgnoreSet;
use crate::utilities::keyword_filter::filter_keywords;

const NO_STRENGTHS: &str = "No significant strengths noted.";
const NO_WEAKNESSES: &str = "No significant weaknesses noted.";

/// Base message and seeded sentences for one severity tier.
struct Band {
    base: &'static str,
    strength: Option<&'static str>,
    weakness: Option<&'static str>,
}

fn band(severity: Severity) -> Band {
    match severity {
        Severity::High => Band {
            base: "Excellent answer, covers all key points.",
            strength: Some("You covered most of the important details well."),
            weakness: None,
        },
        Severity::Medium => Band {
            base: "Good answer but missing some key details.",
            strength: Some("You explained the core concepts effectively."),
            weakness: Some("However, consider adding more detailed explanations or examples."),
        },
        Severity::Low => Band {
            base: "The answer is too basic. Consider adding more details.",
            strength: None,
            weakness: Some("Your answer lacks several key details and important concepts."),
        },
    }
}

/// Builds feedback for `student_answer` measured against `reference_answer`.
///
/// `similarity_score` may be any float; see [`Severity::from_score`] for the banding.
pub fn generate_feedback(
    reference_answer: &str,
    student_answer: &str,
    similarity_score: f64,
    ignore: &IgnoreSet,
) -> Feedback {
    let severity = Severity::from_score(similarity_score);
    let band = band(severity);

    let mut strengths: Vec<String> = band.strength.map(str::to_string).into_iter().collect();
    let mut weaknesses: Vec<String> = band.weakness.map(str::to_string).into_iter().collect();

    let reference_terms = filter_keywords(reference_answer, ignore);
    let student_terms = filter_keywords(student_answer, ignore);

    let common_terms: Vec<&str> = reference_terms
        .intersection(&student_terms)
        .map(String::as_str)
        .collect();
    let missing_terms: Vec<&str> = reference_terms
        .difference(&student_terms)
        .map(String::as_str)
        .collect();

    if !common_terms.is_empty() {
        strengths.push(format!(
            "You did well by including important terms like: {}.",
            common_terms.join(", ")
        ));
    }

    if !missing_terms.is_empty() {
        weaknesses.push(format!(
            "Your answer missed key terms such as: {}. These are essential for a complete response.",
            missing_terms.join(", ")
        ));
    }

    let strengths_block = if strengths.is_empty() {
        NO_STRENGTHS.to_string()
    } else {
        strengths.join("<br>")
    };
    let weaknesses_block = if weaknesses.is_empty() {
        NO_WEAKNESSES.to_string()
    } else {
        weaknesses.join("<br>")
    };

    Feedback {
        text: format!(
            "{}<br><br><strong>Strengths:</strong><br>{}<br><br><strong>Weaknesses:</strong><br>{}",
            band.base, strengths_block, weaknesses_block
        ),
        severity,
    }
}
