//! Shared utilities for the answer grader workspace.
//!
//! Currently this only hosts the env-driven [`config`] singleton.

pub mod config;
