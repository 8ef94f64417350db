//! # Feedback Module
//!
//! Turns a similarity score and the two answers into a human-readable critique.
//!
//! - [`auto_feedback`]: Score-banded, keyword-based template feedback.

pub mod auto_feedback;
