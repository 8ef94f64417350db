//! # Marker Library
//!
//! This module provides the core logic for grading a free-text answer against a reference answer.
//! It obtains a reference (supplied or generated), scores semantic similarity with an external
//! embedding model, and synthesizes templated feedback from the score and the answers' key terms.
//!
//! ## Key Concepts
//! - **GradingJob**: The main struct representing the grading of a single student answer.
//! - **ReferenceProvider / SimilarityScorer**: Pluggable boundaries to the external models.
//! - **Feedback**: Score-banded template feedback highlighting shared and missing key terms.
//! - **Reports**: [`GradeReport`](report::GradeReport) with scaled score, feedback and severity.

pub mod comparators;
pub mod error;
pub mod feedback;
pub mod reference;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

use crate::error::MarkerError;
use crate::feedback::auto_feedback::generate_feedback;
use crate::report::GradeReport;
use crate::scorer::scale_score;
use crate::traits::reference_provider::ReferenceProvider;
use crate::traits::similarity_scorer::SimilarityScorer;
use crate::types::ReferenceSource;
use crate::utilities::ignore_words::IgnoreSet;
use tracing::{info, warn};

/// Default factor applied to the similarity to produce the displayed score.
pub const DEFAULT_SCORE_SCALE: f64 = 5.0;

/// Represents the grading of a single student answer.
///
/// # Fields
/// - `question`: The question the student answered. Used to generate a reference when none is supplied.
/// - `student_answer`: The answer being graded.
/// - `reference`: Where the reference answer comes from.
/// - `scale`: Factor applied to the similarity for the displayed score.
#[derive(Debug, Clone)]
pub struct GradingJob {
    question: String,
    student_answer: String,
    reference: ReferenceSource,
    scale: f64,
}

impl GradingJob {
    /// Create a new grading job.
    ///
    /// # Arguments
    /// * `question` - The question text.
    /// * `student_answer` - The answer to grade.
    /// * `reference` - Manual reference text, or [`ReferenceSource::Generated`].
    pub fn new(
        question: impl Into<String>,
        student_answer: impl Into<String>,
        reference: ReferenceSource,
    ) -> Self {
        Self {
            question: question.into(),
            student_answer: student_answer.into(),
            reference,
            scale: DEFAULT_SCORE_SCALE,
        }
    }

    /// Set the factor applied to the similarity for the displayed score.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Run the grading pipeline and build a report.
    ///
    /// # Steps
    /// 1. Resolves the reference answer (manual text, or a call to `provider`).
    /// 2. Scores similarity between reference and student answer with `scorer`.
    /// 3. Generates feedback from the score and both answers' keywords.
    /// 4. Scales the similarity into the displayed score.
    ///
    /// # Errors
    /// * [`MarkerError::InvalidInput`] if the student answer is blank. No model is called.
    /// * [`MarkerError::EmptyReference`] if the manual or generated reference is blank.
    /// * Any error from `provider` or `scorer`, unchanged.
    pub async fn run(
        &self,
        provider: &dyn ReferenceProvider,
        scorer: &dyn SimilarityScorer,
        ignore: &IgnoreSet,
    ) -> Result<GradeReport, MarkerError> {
        if self.student_answer.trim().is_empty() {
            warn!("Student answer is empty");
            return Err(MarkerError::InvalidInput(
                "Student answer must not be empty".to_string(),
            ));
        }

        let reference = match &self.reference {
            ReferenceSource::Manual(text) => text.clone(),
            ReferenceSource::Generated => provider.generate_reference(&self.question).await?,
        };

        if reference.trim().is_empty() {
            warn!(source = ?self.reference_kind(), "Reference answer is empty");
            return Err(MarkerError::EmptyReference);
        }

        let similarity = scorer.similarity(&reference, &self.student_answer).await?;
        let feedback = generate_feedback(&reference, &self.student_answer, similarity, ignore);
        let score = scale_score(similarity, self.scale);

        info!(
            source = self.reference_kind(),
            similarity,
            score,
            severity = ?feedback.severity,
            "Graded answer"
        );

        Ok(GradeReport::new(score, similarity, reference, feedback))
    }

    fn reference_kind(&self) -> &'static str {
        match self.reference {
            ReferenceSource::Manual(_) => "manual",
            ReferenceSource::Generated => "generated",
        }
    }
}
