// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ateam_broker::EventBroker;
use ateam_core::SystemClock;
use ateam_engine::Engine;
use ateam_storage::Store;

use super::*;

fn app() -> axum::Router {
    let engine = Engine::new(Arc::new(Store::default()), EventBroker::new(16, Duration::from_secs(30)), SystemClock);
    let project = ateam_core::ProjectId::normalize("items-proj").unwrap();
    engine.store().ensure_project(&project, 0);
    crate::build_router(AppState::new(engine))
}

#[tokio::test]
async fn create_list_then_patch_an_item() {
    let app = app();
    let create = Request::builder()
        .method(Method::POST)
        .uri("/api/items")
        .header("X-Project-ID", "items-proj")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"title": "write tests", "itemType": "task", "priority": "high"}"#))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let list = Request::builder().uri("/api/items").header("X-Project-ID", "items-proj").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(list).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let patch = Request::builder()
        .method(Method::PATCH)
        .uri(format!("/api/items/{id}"))
        .header("X-Project-ID", "items-proj")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"title": "write more tests"}"#))
        .unwrap();
    let response = app.oneshot(patch).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let patched: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(patched["data"]["title"], "write more tests");
}

#[tokio::test]
async fn reject_an_item_requires_a_reason_and_agent() {
    let app = app();
    let create = Request::builder()
        .method(Method::POST)
        .uri("/api/items")
        .header("X-Project-ID", "items-proj")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"title": "review me", "itemType": "task", "priority": "low"}"#))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    let created: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let move_to_review = Request::builder()
        .method(Method::POST)
        .uri("/api/board/move")
        .header("X-Project-ID", "items-proj")
        .header("content-type", "application/json")
        .body(Body::from(format!(
            r#"{{"itemId": "{id}", "toStage": "review", "force": true}}"#
        )))
        .unwrap();
    assert_eq!(app.clone().oneshot(move_to_review).await.unwrap().status(), StatusCode::OK);

    let reject = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/items/{id}/reject"))
        .header("X-Project-ID", "items-proj")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"reason": "missing tests", "agent": "Face"}"#))
        .unwrap();
    let response = app.oneshot(reject).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(body["data"]["stage"], "implementing");
}
