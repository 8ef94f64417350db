//!
//! Traits Module
//!
//! This module contains the seams between the grading pipeline and the external model capabilities.
//!
//! - [`reference_provider`]: Produces a reference answer from a question.
//! - [`similarity_scorer`]: Scores semantic similarity between two answers.
//!
//! Implement these traits to plug in a different model backend, or a deterministic stand-in for tests.

pub mod reference_provider;
pub mod similarity_scorer;
