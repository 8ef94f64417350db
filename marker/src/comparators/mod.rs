//! # Comparators
//!
//! This module provides the comparators used to score how close a student answer is to the
//! reference answer.
//!
//! - [`embedding_comparator`]: Embeds both answers with an external model and compares the vectors.
//! - [`cosine`]: Cosine similarity between two embedding vectors.

pub mod cosine;
pub mod embedding_comparator;
