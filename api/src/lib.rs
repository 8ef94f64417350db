//! HTTP front end for the answer grader.
//!
//! - [`routes`]: `/api` endpoints.
//! - [`state`]: Shared, read-only grading collaborators.
//! - [`response`]: The `ApiResponse` envelope.
//! - [`middleware`]: Request logging.

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use axum::{Router, http::header::CONTENT_TYPE, middleware::from_fn};
use tower_http::cors::CorsLayer;

/// Builds the complete application: `/api` routes, request logging and CORS.
pub fn app(app_state: state::AppState) -> Router {
    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::routes(app_state))
        .layer(from_fn(middleware::log_request))
        .layer(cors)
}
