//! # Grade Routes Module
//!
//! Defines the `/grade` endpoint group.
//!
//! ## Structure
//! - `common.rs`: request models and validation
//! - `post.rs`: POST handler that runs a grading job

pub mod common;
pub mod post;

use crate::state::AppState;
use axum::{Router, routing::post};

use post::grade;

/// Builds the `/grade` route group.
///
/// - `POST /grade` → `grade`
pub fn grade_routes() -> Router<AppState> {
    Router::new().route("/", post(grade))
}
