//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/grade` → Grade a student answer

use crate::routes::{grade::grade_routes, health::health_routes};
use crate::state::AppState;
use axum::Router;

pub mod common;
pub mod grade;
pub mod health;

/// Builds the application router for all HTTP endpoints under `/api`.
///
/// The state is applied here so callers get a plain `Router` they can nest and layer.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/grade", grade_routes())
        .with_state(app_state)
}
