use httpmock::prelude::*;
use nourish_flow::core::diet_plan::{
    request_diet_plan, GeminiDietPlanner, MISSING_API_KEY_MESSAGE, NO_PLAN_MESSAGE,
    PLACEHOLDER_API_KEY,
};
use nourish_flow::domain::model::{DietPreference, Severity, Symptom, UserProfile};
use nourish_flow::domain::ports::DietPlanner;
use nourish_flow::HealthError;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn profile() -> UserProfile {
    UserProfile {
        last_period_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        cycle_length_days: 28,
        height_cm: 160.0,
        weight_kg: 60.0,
        diet_preference: DietPreference::Vegetarian,
        allergies: String::new(),
        severity: Severity::Moderate,
        selected_symptoms: [Symptom::Acne, Symptom::WeightGain].into_iter().collect(),
    }
}

#[tokio::test]
async fn test_successful_request_returns_plan_text() {
    let server = MockServer::start_async().await;

    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .query_param("key", "test-key")
                .header("content-type", "application/json")
                .body_contains("\"contents\"")
                .body_contains("Current Weight: 60 kg")
                .body_contains("Ideal Weight (Broca's Index): 60 kg")
                .body_contains("Food Allergies/Aversions: None");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [{
                        "content": {
                            "parts": [{"text": "Day 1: Vegetable poha 🌻"}],
                            "role": "model"
                        }
                    }]
                }));
        })
        .await;

    let planner = GeminiDietPlanner::new(server.url(GENERATE_PATH), Some("test-key".to_string()));
    let plan = planner.request(&profile(), 60.0).await.unwrap();

    assert_eq!(plan, "Day 1: Vegetable poha 🌻");
    api_mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_api_key_skips_network() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.path(GENERATE_PATH);
            then.status(200);
        })
        .await;

    for key in [None, Some(String::new()), Some(PLACEHOLDER_API_KEY.to_string())] {
        let planner = GeminiDietPlanner::new(server.url(GENERATE_PATH), key);

        let result = planner.request(&profile(), 60.0).await;
        assert!(matches!(result, Err(HealthError::MissingApiKey)));

        let text = request_diet_plan(&planner, &profile(), 60.0).await;
        assert_eq!(text, MISSING_API_KEY_MESSAGE);
    }

    api_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_empty_candidates_returns_fallback() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"candidates": []}));
        })
        .await;

    let planner = GeminiDietPlanner::new(server.url(GENERATE_PATH), Some("test-key".to_string()));
    let text = request_diet_plan(&planner, &profile(), 60.0).await;

    assert_eq!(text, NO_PLAN_MESSAGE);
    api_mock.assert_async().await;
}

#[tokio::test]
async fn test_candidate_without_content_returns_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200)
                .json_body(serde_json::json!({"candidates": [{"finishReason": "SAFETY"}]}));
        })
        .await;

    let planner = GeminiDietPlanner::new(server.url(GENERATE_PATH), Some("test-key".to_string()));
    assert_eq!(request_diet_plan(&planner, &profile(), 60.0).await, NO_PLAN_MESSAGE);
}

#[tokio::test]
async fn test_http_error_status_is_reported_without_retry() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(500).body("internal error");
        })
        .await;

    let planner = GeminiDietPlanner::new(server.url(GENERATE_PATH), Some("test-key".to_string()));

    let result = planner.request(&profile(), 60.0).await;
    match result {
        Err(HealthError::HttpStatusError { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected HttpStatusError, got {:?}", other),
    }
    api_mock.assert_hits_async(1).await;

    let text = request_diet_plan(&planner, &profile(), 60.0).await;
    assert!(text.starts_with("An error occurred while calling the API:"));
    assert!(text.contains("500"));
    api_mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn test_transport_failure_returns_error_detail() {
    // 沒有服務在監聽的埠
    let planner = GeminiDietPlanner::new(
        "http://127.0.0.1:1/v1beta/models/test:generateContent",
        Some("test-key".to_string()),
    );

    let result = planner.request(&profile(), 60.0).await;
    assert!(matches!(result, Err(HealthError::ApiError(_))));

    let text = request_diet_plan(&planner, &profile(), 60.0).await;
    assert!(text.starts_with("An error occurred while calling the API: "));
    assert!(text.contains("API request failed"));
}

#[tokio::test]
async fn test_invalid_json_body_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let planner = GeminiDietPlanner::new(server.url(GENERATE_PATH), Some("test-key".to_string()));

    let result = planner.request(&profile(), 60.0).await;
    assert!(matches!(result, Err(HealthError::SerializationError(_))));

    let text = request_diet_plan(&planner, &profile(), 60.0).await;
    assert!(text.starts_with("An error occurred while calling the API: Serialization error"));
}

#[tokio::test]
async fn test_transport_failure_does_not_expose_api_key() {
    let planner = GeminiDietPlanner::new(
        "http://127.0.0.1:1/v1beta/models/test:generateContent",
        Some("SUPERSECRET123".to_string()),
    );

    let result = planner.request(&profile(), 60.0).await;
    match result {
        Err(e @ HealthError::ApiError(_)) => {
            assert!(!e.to_string().contains("SUPERSECRET123"));
            assert!(!e.user_friendly_message().contains("SUPERSECRET123"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }

    let text = request_diet_plan(&planner, &profile(), 60.0).await;
    assert!(text.starts_with("An error occurred while calling the API: "));
    assert!(!text.contains("SUPERSECRET123"));
    assert!(!text.contains("key="));
}

#[tokio::test]
async fn test_null_candidates_returns_fallback() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"candidates": null, "promptFeedback": {"blockReason": "SAFETY"}}"#);
        })
        .await;

    let planner = GeminiDietPlanner::new(server.url(GENERATE_PATH), Some("test-key".to_string()));

    let result = planner.request(&profile(), 60.0).await;
    assert!(matches!(result, Err(HealthError::MalformedResponse { .. })));
    assert_eq!(request_diet_plan(&planner, &profile(), 60.0).await, NO_PLAN_MESSAGE);
    api_mock.assert_hits_async(2).await;
}
