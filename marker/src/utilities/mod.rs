//! # Utilities
//!
//! Helpers shared across the `marker` crate.
//!
//! - [`ignore_words`]: Loads the immutable set of ignore words.
//! - [`keyword_filter`]: Extracts keyword sets from answers.
//! - [`gemini`]: Request/response types and settings for the Gemini REST API.

pub mod gemini;
pub mod ignore_words;
pub mod keyword_filter;
