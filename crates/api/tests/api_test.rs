//! End-to-end tests of the HTTP API over the in-memory store.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use costwise_api::{AppState, create_router};
use costwise_db::{MemoryStore, seed::default_users};
use costwise_shared::AppConfig;
use costwise_shared::config::{AboutConfig, CostsConfig, TeamMember};

fn config(require_existing_user: bool) -> AppConfig {
    AppConfig {
        costs: CostsConfig {
            require_existing_user,
        },
        about: AboutConfig {
            team: vec![
                TeamMember {
                    first_name: "Noy".to_string(),
                    last_name: "Klar".to_string(),
                },
                TeamMember {
                    first_name: "Daniel".to_string(),
                    last_name: "Podolsky".to_string(),
                },
            ],
        },
        ..AppConfig::default()
    }
}

fn app_with(require_existing_user: bool) -> Router {
    let store = Arc::new(MemoryStore::with_users(default_users()));
    create_router(AppState::new(store, &config(require_existing_user)))
}

fn app() -> Router {
    app_with(false)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

// ============================================================================
// Health and about
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(&app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_about_lists_team_in_order() {
    let (status, body) = get(&app(), "/api/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "first_name": "Noy", "last_name": "Klar" },
            { "first_name": "Daniel", "last_name": "Podolsky" }
        ])
    );
}

// ============================================================================
// Cost ingestion
// ============================================================================

#[tokio::test]
async fn test_add_cost_returns_created_record() {
    let app = app();
    let input = json!({
        "description": "lunch",
        "category": "food",
        "userid": 123_123,
        "sum": 20,
        "created_at": "2025-05-14T12:00:00Z"
    });

    let (status, body) = post_json(&app, "/api/add", &input).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Cost item added successfully");
    let cost = &body["cost"];
    assert!(cost["id"].is_i64());
    assert_eq!(cost["description"], "lunch");
    assert_eq!(cost["category"], "food");
    assert_eq!(cost["userid"], 123_123);
    assert_eq!(cost["sum"], 20.0);
    assert_eq!(cost["created_at"], "2025-05-14T12:00:00Z");
}

#[tokio::test]
async fn test_add_cost_defaults_timestamp_to_now() {
    let input = json!({
        "description": "gym",
        "category": "sport",
        "userid": "123123",
        "sum": "35.5"
    });
    let before = chrono::Utc::now();

    let (status, body) = post_json(&app(), "/api/add", &input).await;

    assert_eq!(status, StatusCode::CREATED);
    let created_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(body["cost"]["created_at"].clone()).unwrap();
    assert!(created_at >= before);
    assert_eq!(body["cost"]["sum"], 35.5);
}

#[rstest]
#[case(json!({ "category": "food", "userid": 1, "sum": 5 }), "Missing required fields")]
#[case(json!({ "description": "x", "category": "food", "userid": 1, "sum": 0 }), "Missing required fields")]
#[case(json!({ "description": "", "category": "food", "userid": 1, "sum": 5 }), "Missing required fields")]
#[case(json!({ "description": "x", "category": "food", "userid": "abc", "sum": 5 }), "Invalid number values for userid or sum")]
#[case(json!({ "description": "x", "category": "food", "userid": 1, "sum": -5 }), "Sum must be a positive number (Greater than 0)")]
#[case(json!({ "description": 42, "category": "food", "userid": 1, "sum": 5 }), "Description must be a non-empty string")]
#[case(json!({ "description": "x", "category": "travel", "userid": 1, "sum": 5 }), "Invalid category. Must be one of: food, health, housing, sport, education")]
#[case(json!({ "description": "x", "category": "food", "userid": 1, "sum": 5, "created_at": "yesterday" }), "Invalid created_at timestamp")]
#[tokio::test]
async fn test_add_cost_rejects_invalid_input(#[case] input: Value, #[case] message: &str) {
    let (status, body) = post_json(&app(), "/api/add", &input).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], message);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_add_cost_keeps_every_digit_of_sum() {
    let input = json!({
        "description": "car",
        "category": "housing",
        "userid": 123_123,
        "sum": "12345678901234567.89"
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/add")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(input.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#""sum":12345678901234567.89"#));
}

#[tokio::test]
async fn test_add_cost_rejects_non_object_body() {
    let (status, body) = post_json(&app(), "/api/add", &json!([1, 2, 3])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_add_cost_for_unknown_user_is_accepted_by_default() {
    let input = json!({ "description": "x", "category": "food", "userid": 42, "sum": 5 });
    let (status, _) = post_json(&app(), "/api/add", &input).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_add_cost_for_unknown_user_when_required() {
    let app = app_with(true);
    let unknown = json!({ "description": "x", "category": "food", "userid": 42, "sum": 5 });
    let (status, body) = post_json(&app, "/api/add", &unknown).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let known = json!({ "description": "x", "category": "food", "userid": 123_123, "sum": 5 });
    let (status, _) = post_json(&app, "/api/add", &known).await;
    assert_eq!(status, StatusCode::CREATED);
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn test_report_groups_ingested_cost() {
    let app = app();
    let input = json!({
        "description": "lunch",
        "category": "food",
        "userid": 1,
        "sum": 20,
        "created_at": "2025-05-14T12:00:00Z"
    });
    post_json(&app, "/api/add", &input).await;

    let (status, body) = get(&app, "/api/report?id=1&year=2025&month=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "userid": 1,
            "year": 2025,
            "month": 5,
            "costs": {
                "food": [{ "sum": 20, "day": 14, "description": "lunch" }],
                "health": [],
                "housing": [],
                "sport": [],
                "education": []
            }
        })
    );
}

#[tokio::test]
async fn test_report_excludes_other_months_and_users() {
    let app = app();
    for (userid, at) in [
        (1, "2025-04-30T23:59:59.999Z"),
        (1, "2025-06-01T00:00:00Z"),
        (2, "2025-05-10T00:00:00Z"),
        (1, "2025-05-31T23:59:59.999Z"),
    ] {
        let input = json!({
            "description": "rent",
            "category": "housing",
            "userid": userid,
            "sum": 900,
            "created_at": at
        });
        let (status, _) = post_json(&app, "/api/add", &input).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = get(&app, "/api/report?id=1&year=2025&month=5").await;
    let housing = body["costs"]["housing"].as_array().unwrap();
    assert_eq!(housing.len(), 1);
    assert_eq!(housing[0]["day"], 31);
}

#[tokio::test]
async fn test_report_includes_sub_millisecond_end_of_month() {
    let app = app();
    let input = json!({
        "description": "late",
        "category": "food",
        "userid": 1,
        "sum": 5,
        "created_at": "2025-05-31T23:59:59.9995Z"
    });
    let (status, _) = post_json(&app, "/api/add", &input).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, may) = get(&app, "/api/report?id=1&year=2025&month=5").await;
    let food = may["costs"]["food"].as_array().unwrap();
    assert_eq!(food.len(), 1);
    assert_eq!(food[0]["day"], 31);

    let (_, june) = get(&app, "/api/report?id=1&year=2025&month=6").await;
    assert!(june["costs"]["food"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_report_is_idempotent() {
    let app = app();
    let input = json!({ "description": "pills", "category": "health", "userid": 1, "sum": 9.9,
                        "created_at": "2025-05-02" });
    post_json(&app, "/api/add", &input).await;

    let first = get(&app, "/api/report?id=1&year=2025&month=5").await;
    let second = get(&app, "/api/report?id=1&year=2025&month=5").await;
    assert_eq!(first, second);
}

#[rstest]
#[case("/api/report?id=1&year=2025", "Missing required query parameters: id, year and month")]
#[case("/api/report", "Missing required query parameters: id, year and month")]
#[case("/api/report?id=1&year=2025&month=13", "Month must be between 1 and 12")]
#[case("/api/report?id=abc&year=abc&month=13", "Month must be between 1 and 12")]
#[case("/api/report?id=abc&year=2025&month=5", "Invalid number values for id, year or month")]
#[case("/api/report?id=1&year=2025&month=may", "Invalid number values for id, year or month")]
#[case("/api/report?id=1&year=-5000&month=5", "Year is out of range")]
#[tokio::test]
async fn test_report_rejects_invalid_query(#[case] uri: &str, #[case] message: &str) {
    let (status, body) = get(&app(), uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], message);
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_summary_without_costs() {
    let (status, body) = get(&app(), "/api/users/123123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "first_name": "mosh", "last_name": "israeli", "id": 123_123, "total": 0 })
    );
}

#[tokio::test]
async fn test_user_summary_totals_all_costs() {
    let app = app();
    for (sum, at) in [(12.5, "2024-12-31T10:00:00Z"), (50.0, "2025-05-01T10:00:00Z")] {
        let input = json!({ "description": "x", "category": "education", "userid": 123_123,
                            "sum": sum, "created_at": at });
        post_json(&app, "/api/add", &input).await;
    }

    let (status, body) = get(&app, "/api/users/123123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 62.5);
}

#[tokio::test]
async fn test_unknown_user() {
    let (status, body) = get(&app(), "/api/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found", "code": "NOT_FOUND" }));
}

#[tokio::test]
async fn test_non_numeric_user_id() {
    let (status, body) = get(&app(), "/api/users/notanumber").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user ID (Must be a number)");
}
