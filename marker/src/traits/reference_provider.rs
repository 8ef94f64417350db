//!
//! # Reference Provider Trait
//!
//! Defines the [`ReferenceProvider`] trait: the boundary to an external text-generation
//! capability that produces a reference answer from a question.
//!

use crate::error::MarkerError;
use async_trait::async_trait;

/// Produces a reference answer for a question.
///
/// Implementations must surface failures as [`MarkerError`] rather than returning empty text.
/// A blank result is rejected by the grading job with [`MarkerError::EmptyReference`].
#[async_trait]
pub trait ReferenceProvider: Send + Sync {
    async fn generate_reference(&self, question: &str) -> Result<String, MarkerError>;
}
