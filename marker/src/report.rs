//! # Grade Report Module
//!
//! Defines [`GradeReport`], the serializable result of grading one answer.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "score": 3.5,
//!   "similarity": 0.7,
//!   "reference_answer": "Mitochondria is the powerhouse of the cell",
//!   "feedback": "Good answer but missing some key details.<br><br><strong>Strengths:</strong><br>...",
//!   "severity": "medium",
//!   "feedback_class": "bg-yellow-100 text-yellow-600"
//! }
//! ```

use crate::types::{Feedback, Severity};
use serde::Serialize;

/// The result of grading one student answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    /// Similarity scaled by the configured factor, rounded to two decimals.
    pub score: f64,
    /// Raw similarity between reference and student answer.
    pub similarity: f64,
    /// The reference the answer was graded against (manual or generated).
    pub reference_answer: String,
    /// Feedback text with `<br>`/`<strong>` markup.
    pub feedback: String,
    pub severity: Severity,
    /// Display treatment for `severity`.
    pub feedback_class: String,
}

impl GradeReport {
    pub fn new(score: f64, similarity: f64, reference_answer: String, feedback: Feedback) -> Self {
        Self {
            score,
            similarity,
            reference_answer,
            feedback_class: feedback.severity.css_class().to_string(),
            feedback: feedback.text,
            severity: feedback.severity,
        }
    }
}
