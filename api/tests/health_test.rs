mod helpers;

use axum::{body::Body, http::Request, http::StatusCode};
use helpers::{StubGenerator, StubScorer, make_test_app, read_json};
use tower::ServiceExt;

#[tokio::test]
async fn health_endpoint_is_public() {
    let app = make_test_app(StubGenerator::Fail, StubScorer::Fail);

    let req = Request::builder()
        .method("GET")
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = make_test_app(StubGenerator::Fail, StubScorer::Fail);

    let req = Request::builder()
        .method("GET")
        .uri("/api/submissions")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn grade_rejects_get() {
    let app = make_test_app(StubGenerator::Fail, StubScorer::Fail);

    let req = Request::builder()
        .method("GET")
        .uri("/api/grade")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
