//! Answer grading route.
//!
//! Provides the `POST /api/grade` endpoint. Responses follow the standard `ApiResponse` format.

use super::common::GradeRequest;
use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::Response};
use marker::GradingJob;
use marker::error::MarkerError;
use tracing::{error, warn};
use validator::Validate;

/// POST /api/grade
///
/// Grades a student answer against a manual or AI-generated reference answer.
///
/// ### Request Body
/// ```json
/// {
///   "question": "What does the mitochondria do?",
///   "student_answer": "mitochondria is a powerhouse",
///   "input_type": "manual",
///   "model_answer": "mitochondria is the powerhouse of the cell"
/// }
/// ```
///
/// ### Validation Rules
/// * `question`, `student_answer`: required, not blank, at most 10000 characters
/// * `input_type`: `"manual"` or `"ai"` (anything else is rejected by the JSON extractor with `422`)
/// * `model_answer`: required and not blank when `input_type` is `"manual"`, at most 10000 characters
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "score": 3.5,
///     "similarity": 0.7,
///     "reference_answer": "mitochondria is the powerhouse of the cell",
///     "feedback": "Good answer but missing some key details.<br><br><strong>Strengths:</strong><br>...",
///     "severity": "medium",
///     "feedback_class": "bg-yellow-100 text-yellow-600"
///   },
///   "message": "Answer graded successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure, missing or empty reference answer)
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "A reference answer is required when input_type is manual"
/// }
/// ```
///
/// - `502 Bad Gateway` (the generation or embedding model failed)
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Failed to score answer similarity"
/// }
/// ```
pub async fn grade(State(state): State<AppState>, Json(req): Json<GradeRequest>) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return ApiResponse::<()>::error(error_message).with_status(StatusCode::BAD_REQUEST);
    }

    let Some(reference) = req.reference_source() else {
        return ApiResponse::<()>::error("A reference answer is required when input_type is manual")
            .with_status(StatusCode::BAD_REQUEST);
    };

    let job = GradingJob::new(req.question, req.student_answer, reference)
        .with_scale(state.score_scale());

    match job
        .run(state.generator(), state.scorer(), state.ignore())
        .await
    {
        Ok(report) => {
            ApiResponse::success(report, "Answer graded successfully").with_status(StatusCode::OK)
        }
        Err(e) => error_response(e),
    }
}

fn error_response(e: MarkerError) -> Response {
    let (status, message) = match &e {
        MarkerError::EmptyReference => (
            StatusCode::BAD_REQUEST,
            "The reference answer is empty".to_string(),
        ),
        MarkerError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        MarkerError::Generation(_) => (
            StatusCode::BAD_GATEWAY,
            "Failed to generate a reference answer".to_string(),
        ),
        MarkerError::Similarity(_) => (
            StatusCode::BAD_GATEWAY,
            "Failed to score answer similarity".to_string(),
        ),
        MarkerError::Io(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    };

    if status.is_server_error() {
        error!(error = %e, "Grading failed");
    } else {
        warn!(error = %e, "Grading request rejected");
    }

    ApiResponse::<()>::error(message).with_status(status)
}
