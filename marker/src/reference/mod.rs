//! # Reference Generators
//!
//! Implementations of [`ReferenceProvider`](crate::traits::reference_provider::ReferenceProvider).
//!
//! - [`gemini_reference`]: Generates a reference answer with a Gemini text model.

pub mod gemini_reference;
