//! Grade request/response models.

use marker::types::ReferenceSource;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// How the reference answer is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// The caller supplies `model_answer`.
    Manual,
    /// The reference is generated from the question.
    Ai,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct GradeRequest {
    #[validate(
        custom(function = "not_blank", message = "Question must not be empty"),
        length(max = 10000, message = "Question must be at most 10000 characters")
    )]
    pub question: String,

    #[validate(
        custom(function = "not_blank", message = "Student answer must not be empty"),
        length(max = 10000, message = "Student answer must be at most 10000 characters")
    )]
    pub student_answer: String,

    pub input_type: InputType,

    #[validate(length(max = 10000, message = "Model answer must be at most 10000 characters"))]
    pub model_answer: Option<String>,
}

impl GradeRequest {
    /// Resolves the reference source, or `None` when `manual` was chosen without usable text.
    pub fn reference_source(&self) -> Option<ReferenceSource> {
        match self.input_type {
            InputType::Ai => Some(ReferenceSource::Generated),
            InputType::Manual => self
                .model_answer
                .as_ref()
                .filter(|text| !text.trim().is_empty())
                .map(|text| ReferenceSource::Manual(text.clone())),
        }
    }
}
