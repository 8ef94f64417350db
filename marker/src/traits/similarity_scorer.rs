//!
//! # Similarity Scorer Trait
//!
//! Defines the [`SimilarityScorer`] trait: the boundary to an external embedding capability
//! that measures semantic closeness between two texts.
//!

use crate::error::MarkerError;
use async_trait::async_trait;

/// Scores how semantically close `student` is to `reference`.
///
/// The result is nominally in `[0, 1]` (cosine similarity can dip below zero). Implementations
/// must be deterministic for identical inputs and must never coerce a failure into a score.
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    async fn similarity(&self, reference: &str, student: &str) -> Result<f64, MarkerError>;
}
