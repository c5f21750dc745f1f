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
    let project = ateam_core::ProjectId::normalize("missions-proj").unwrap();
    engine.store().ensure_project(&project, 0);
    crate::build_router(AppState::new(engine))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

#[tokio::test]
async fn create_mission_then_precheck_moves_to_running() {
    let app = app();
    let create = Request::builder()
        .method(Method::POST)
        .uri("/api/missions")
        .header("X-Project-ID", "missions-proj")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name": "sprint one", "prdPath": "docs/prd.md"}"#))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let precheck = Request::builder()
        .method(Method::POST)
        .uri("/api/missions/precheck")
        .header("X-Project-ID", "missions-proj")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"checks": [{"name": "lint", "passed": true}]}"#))
        .unwrap();
    let response = app.clone().oneshot(precheck).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["data"]["state"], "running");

    let current = Request::builder()
        .uri("/api/missions/current")
        .header("X-Project-ID", "missions-proj")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(current).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["data"]["name"], "sprint one");
}

#[tokio::test]
async fn archive_with_no_mission_is_rejected() {
    let app = app();
    let archive = Request::builder()
        .method(Method::POST)
        .uri("/api/missions/archive")
        .header("X-Project-ID", "missions-proj")
        .header("content-type", "application/json")
        .body(Body::from(r#"{}"#))
        .unwrap();
    let response = app.oneshot(archive).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
