//! HTTP-level tests for the error contract: 400 for malformed input,
//! 404 for unknown ids, and the standard `{ "error", "code" }` body.

mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, post_json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_uuid_path_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/regions/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_json_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/regions")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_required_field_returns_400(pool: PgPool) {
    // `description`, `lengthInKm`, and both foreign keys are absent.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/walks", serde_json::json!({"name": "Track A"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_not_found_body_has_error_and_code(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/regions/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("Region"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_validation_error_names_offending_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/regions",
        serde_json::json!({"code": "WLG", "name": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("name"));
}
