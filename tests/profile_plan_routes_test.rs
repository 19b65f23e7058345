// ABOUTME: Integration tests for the profile and saved plan HTTP routes
// ABOUTME: Profile upsert and validation, plan saving with automatic allocation, latest plan lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_resources, new_user_path, sample_measurements};
use helpers::axum_test::AxumTestRequest;
use pulse_core::models::{FitnessGoal, UserProfile};
use pulse_intelligence::calculate;
use pulse_server::database::SavedPlan;
use pulse_server::routes::plans::PlanListResponse;
use pulse_server::server::build_router;
use serde_json::{json, Value};

// ============================================================================
// Profiles
// ============================================================================

#[tokio::test]
async fn test_profile_not_found_before_first_save() {
    let app = build_router(create_test_resources().await.unwrap());
    let (_, base) = new_user_path();

    let response = AxumTestRequest::get(&format!("{base}/profile")).send(app).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_profile_put_then_get() {
    let resources = create_test_resources().await.unwrap();
    let (user_id, base) = new_user_path();

    let response = AxumTestRequest::put(&format!("{base}/profile"))
        .json(&json!({
            "display_name": "  Jordan  ",
            "height_cm": 168.0,
            "sex": "female",
            "activity_level": "light",
            "goal": "maintenance"
        }))
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let saved: UserProfile = response.json();
    assert_eq!(saved.user_id, user_id);
    assert_eq!(saved.display_name.as_deref(), Some("Jordan"));

    let response = AxumTestRequest::get(&format!("{base}/profile"))
        .send(build_router(resources))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let profile: UserProfile = response.json();
    assert_eq!(profile.display_name.as_deref(), Some("Jordan"));
    assert_eq!(profile.height_cm, Some(168.0));
    assert_eq!(profile.goal, Some(FitnessGoal::Maintenance));
}

#[tokio::test]
async fn test_profile_validation() {
    let resources = create_test_resources().await.unwrap();
    let (_, base) = new_user_path();

    let response = AxumTestRequest::put(&format!("{base}/profile"))
        .json(&json!({ "height_cm": -4.0 }))
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["field"], "height_cm");

    let response = AxumTestRequest::put(&format!("{base}/profile"))
        .json(&json!({ "display_name": "x".repeat(101) }))
        .send(build_router(resources))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["field"], "display_name");
}

#[tokio::test]
async fn test_invalid_user_id_in_path() {
    let app = build_router(create_test_resources().await.unwrap());
    let response = AxumTestRequest::get("/api/users/not-a-uuid/profile")
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["details"]["field"], "user_id");
}

// ============================================================================
// Saved Plans
// ============================================================================

#[tokio::test]
async fn test_save_plan_allocates_missing_diet_plan() {
    let resources = create_test_resources().await.unwrap();
    let (user_id, base) = new_user_path();
    let metrics = calculate(&sample_measurements()).unwrap();

    let response = AxumTestRequest::post(&format!("{base}/plans"))
        .json(&json!({ "metrics": metrics }))
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let saved: SavedPlan = response.json();
    assert_eq!(saved.user_id, user_id);
    assert_eq!(saved.metrics, metrics);
    assert_eq!(saved.diet_plan.meals.len(), 5);
    assert!((saved.diet_plan.total_calories - 2233.0).abs() < f64::EPSILON);

    let response = AxumTestRequest::get(&format!("{base}/plans/latest"))
        .send(build_router(resources))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let latest: SavedPlan = response.json();
    assert_eq!(latest.id, saved.id);
}

#[tokio::test]
async fn test_list_plans_newest_first_with_limit() {
    let resources = create_test_resources().await.unwrap();
    let (_, base) = new_user_path();
    let metrics = calculate(&sample_measurements()).unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        let response = AxumTestRequest::post(&format!("{base}/plans"))
            .json(&json!({ "metrics": metrics }))
            .send(build_router(resources.clone()))
            .await;
        let saved: SavedPlan = response.json();
        ids.push(saved.id);
    }

    let response = AxumTestRequest::get(&format!("{base}/plans?limit=2"))
        .send(build_router(resources))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: PlanListResponse = response.json();
    assert_eq!(body.total, 2);
    assert_eq!(body.plans[0].id, ids[2]);
    assert_eq!(body.plans[1].id, ids[1]);
}

#[tokio::test]
async fn test_latest_plan_not_found() {
    let app = build_router(create_test_resources().await.unwrap());
    let (_, base) = new_user_path();
    let response = AxumTestRequest::get(&format!("{base}/plans/latest"))
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_plan_rejects_non_positive_target() {
    let app = build_router(create_test_resources().await.unwrap());
    let (_, base) = new_user_path();
    let mut metrics = calculate(&sample_measurements()).unwrap();
    metrics.target_calories = -10.0;

    let response = AxumTestRequest::post(&format!("{base}/plans"))
        .json(&json!({ "metrics": metrics }))
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["field"], "metrics.target_calories");
}
