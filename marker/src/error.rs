//! Marker Error Types
//!
//! This module defines the [`MarkerError`] enum, which covers every failure that can occur while
//! grading an answer: loading the ignore-word list, generating a reference answer, scoring
//! similarity, and validating grading input.
//!
//! The keyword filter and feedback synthesizer never fail; only the external boundaries do.
//!
//! # Example
//!
//! ```rust
//! use marker::error::MarkerError;
//!
//! fn require_text(data: &str) -> Result<(), MarkerError> {
//!     if data.trim().is_empty() {
//!         return Err(MarkerError::InvalidInput("answer text".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents all error types that can occur in the marker system.
#[derive(Debug, Error)]
pub enum MarkerError {
    /// I/O error (ignore-word file not found, unreadable, etc.).
    #[error("I/O error: {0}")]
    Io(String),
    /// The reference-answer generator failed or returned an unusable response.
    #[error("reference generation failed: {0}")]
    Generation(String),
    /// The reference answer (manual or generated) is blank.
    #[error("reference answer is empty")]
    EmptyReference,
    /// The similarity capability failed or returned an unusable response.
    #[error("similarity scoring failed: {0}")]
    Similarity(String),
    /// Grading input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
