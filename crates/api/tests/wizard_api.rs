//! HTTP-level integration tests for the tour creation wizard.
//!
//! Each test gets a fresh database from `#[sqlx::test]`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn start_session(pool: &PgPool, language: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/tour-wizard",
        json!({ "language": language }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn post(pool: &PgPool, uri: &str) -> serde_json::Value {
    let response = post_json(common::build_test_app(pool.clone()), uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::OK, "POST {uri}");
    body_json(response).await["data"].clone()
}

async fn set_field(pool: &PgPool, id: i64, field: &str, value: &str) {
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/tour-wizard/{id}/fields"),
        json!({ "field": field, "value": value }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "set {field}");
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_session_starts_on_basic_info(pool: PgPool) {
    let id = start_session(&pool, "en").await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/admin/tour-wizard/{id}"),
    )
    .await;
    let data = &body_json(response).await["data"];

    assert_eq!(data["current_step"], 1);
    assert_eq!(data["status"], "in_progress");
    assert_eq!(data["is_final_step"], false);
    assert_eq!(data["steps"].as_array().unwrap().len(), 5);
    assert_eq!(data["steps"][0]["current"], true);
    assert_eq!(data["steps"][0]["completed"], false);
    let fields: Vec<&str> = data["current_fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["title", "category", "availability", "duration"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn navigation_clamps_at_both_ends(pool: PgPool) {
    let id = start_session(&pool, "en").await;

    let back = post(&pool, &format!("/api/v1/admin/tour-wizard/{id}/go-back")).await;
    assert_eq!(back["current_step"], 1);

    for expected in 2..=5 {
        let data = post(&pool, &format!("/api/v1/admin/tour-wizard/{id}/advance")).await;
        assert_eq!(data["current_step"], expected);
    }
    let data = post(&pool, &format!("/api/v1/admin/tour-wizard/{id}/advance")).await;
    assert_eq!(data["current_step"], 5);
    assert_eq!(data["is_final_step"], true);
    assert_eq!(data["steps"][3]["completed"], true);
    assert_eq!(data["current_fields"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fields_survive_navigation(pool: PgPool) {
    let id = start_session(&pool, "de").await;
    set_field(&pool, id, "title", "Nilkreuzfahrt").await;
    post(&pool, &format!("/api/v1/admin/tour-wizard/{id}/advance")).await;
    // Any field may be written from any step.
    set_field(&pool, id, "category", "Bootsfahrt").await;
    let data = post(&pool, &format!("/api/v1/admin/tour-wizard/{id}/go-back")).await;

    assert_eq!(data["form"]["title"], "Nilkreuzfahrt");
    assert_eq!(data["form"]["category"], "Bootsfahrt");
    assert_eq!(data["current_fields"][0]["value"], "Nilkreuzfahrt");
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn complete_before_final_step_is_rejected(pool: PgPool) {
    let id = start_session(&pool, "en").await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/admin/tour-wizard/{id}/complete"),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completion_creates_tour_and_reports_missing_fields(pool: PgPool) {
    let id = start_session(&pool, "ar").await;
    set_field(&pool, id, "title", "جولة الأهرامات").await;
    set_field(&pool, id, "highlights", "أبو الهول").await;
    for _ in 0..4 {
        post(&pool, &format!("/api/v1/admin/tour-wizard/{id}/advance")).await;
    }

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/tour-wizard/{id}/complete"),
        json!({ "price_cents": 4500 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let data = &body_json(response).await["data"];

    assert_eq!(data["session"]["status"], "completed");
    assert_eq!(data["tour"]["price_cents"], 4500);
    assert_eq!(data["translation"]["language"], "ar");
    assert_eq!(data["translation"]["highlights"], "أبو الهول");
    assert_eq!(data["validation"]["overridden"], true);
    assert_eq!(
        data["validation"]["missing"],
        json!(["category", "duration", "description"])
    );

    // A finished session accepts no further transitions.
    let again = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/admin/tour-wizard/{id}/complete"),
        json!({}),
    )
    .await;
    assert_eq!(again.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn abandoned_session_is_frozen(pool: PgPool) {
    let id = start_session(&pool, "en").await;
    let data = post(&pool, &format!("/api/v1/admin/tour-wizard/{id}/abandon")).await;
    assert_eq!(data["status"], "abandoned");

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/admin/tour-wizard/{id}/fields"),
        json!({ "field": "title", "value": "Late edit" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_session_returns_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/v1/admin/tour-wizard/999999",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
