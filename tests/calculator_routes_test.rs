// ABOUTME: Integration tests for the calculator, health, and fallback HTTP routes
// ABOUTME: Exercises the full router with oneshot requests against an in-memory database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{carb_clamp_measurements, create_test_app, sample_measurements};
use helpers::axum_test::AxumTestRequest;
use pulse_core::models::{DietPlan, MealSlotKind};
use pulse_server::routes::calculator::CalculationResponse;
use serde_json::{json, Value};

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::get("/health").send(app).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "pulse-server");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_reports_checks() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::get("/ready").send(app).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], true);
    assert_eq!(body["checks"]["recipes"], 20);
    assert_eq!(body["checks"]["workouts"], 13);
}

#[tokio::test]
async fn test_unknown_route_returns_error_json() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::get("/api/nothing-here").send(app).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Route /api/nothing-here not found");
}

#[tokio::test]
async fn test_request_id_is_accepted() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "req_test_123")
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

// ============================================================================
// Calculator
// ============================================================================

#[tokio::test]
async fn test_calculate_worked_example() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::post("/api/calculator")
        .json(&sample_measurements())
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: CalculationResponse = response.json();

    assert!((body.metrics.target_calories - 2233.0).abs() < f64::EPSILON);
    assert!((body.metrics.protein_g - 165.0).abs() < f64::EPSILON);
    assert!((body.metrics.carbs_g - 258.0).abs() < f64::EPSILON);
    assert_eq!(body.diet_plan.meals.len(), 5);
    assert_eq!(body.diet_plan.meals[0].kind, MealSlotKind::Breakfast);
    assert!((body.diet_plan.meals[4].target_calories - 559.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_calculate_wire_format() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::post("/api/calculator")
        .json(&json!({
            "weight": 75,
            "height": 175,
            "age": 30,
            "gender": "male",
            "activity": "moderate",
            "goal": "cutting",
            "is_smoker": false
        }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["metrics"]["bmi_category"], "normal");
    assert_eq!(body["metrics"]["goal"], "cutting");
    assert_eq!(body["diet_plan"]["meals"][1]["kind"], "morning_snack");
    assert_eq!(body["diet_plan"]["meals"][1]["time"], "10:00");
}

#[tokio::test]
async fn test_calculate_missing_field() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::post("/api/calculator")
        .json(&json!({
            "weight_kg": 75,
            "height_cm": 175,
            "sex": "male",
            "activity_level": "moderate",
            "goal": "cutting"
        }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["error"]["details"]["field"], "age");
}

#[tokio::test]
async fn test_calculate_invalid_value() {
    let app = create_test_app().await.unwrap();
    let mut input = serde_json::to_value(sample_measurements()).unwrap();
    input["activity_level"] = json!("couch");

    let response = AxumTestRequest::post("/api/calculator")
        .json(&input)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["details"]["field"], "activity_level");
}

#[tokio::test]
async fn test_calculate_implausible_measurements() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::post("/api/calculator")
        .json(&json!({
            "weight_kg": 1,
            "height_cm": 1,
            "age_years": 100,
            "sex": "female",
            "activity_level": "sedentary",
            "goal": "cutting"
        }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(body["error"].get("details").is_none());
}

#[tokio::test]
async fn test_calculate_reports_carb_clamp() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::post("/api/calculator")
        .json(&carb_clamp_measurements())
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["metrics"]["carbs_g"], 0.0);
    assert_eq!(body["metrics"]["warnings"][0]["kind"], "carbs_clamped");
    assert_eq!(body["metrics"]["warnings"][0]["unclamped_g"], -139.0);
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let app = create_test_app().await.unwrap();
    let response = AxumTestRequest::post("/api/calculator")
        .raw_body("{not json", "application/json")
        .send(app)
        .await;
    assert!(response.status_code().is_client_error());
}

// ============================================================================
// Diet Plan From Metrics
// ============================================================================

#[tokio::test]
async fn test_diet_plan_from_metrics() {
    let app = create_test_app().await.unwrap();
    let metrics = pulse_intelligence::calculate(&sample_measurements()).unwrap();

    let response = AxumTestRequest::post("/api/calculator/diet-plan")
        .json(&metrics)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let plan: DietPlan = response.json();
    let calories: Vec<f64> = plan.meals.iter().map(|m| m.target_calories).collect();
    assert_eq!(calories, vec![558.0, 223.0, 670.0, 223.0, 559.0]);
}

#[tokio::test]
async fn test_diet_plan_rejects_non_positive_target() {
    let app = create_test_app().await.unwrap();
    let mut metrics = pulse_intelligence::calculate(&sample_measurements()).unwrap();
    metrics.target_calories = 0.0;

    let response = AxumTestRequest::post("/api/calculator/diet-plan")
        .json(&metrics)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["field"], "target_calories");
}
