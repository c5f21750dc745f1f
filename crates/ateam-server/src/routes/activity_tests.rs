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
    let project = ateam_core::ProjectId::normalize("activity-proj").unwrap();
    engine.store().ensure_project(&project, 0);
    crate::build_router(AppState::new(engine))
}

#[tokio::test]
async fn log_then_list_activity_round_trips() {
    let app = app();
    let log = Request::builder()
        .method(Method::POST)
        .uri("/api/activity")
        .header("X-Project-ID", "activity-proj")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"message": "starting up", "agent": "B.A."}"#))
        .unwrap();
    let response = app.clone().oneshot(log).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let list = Request::builder()
        .uri("/api/activity")
        .header("X-Project-ID", "activity-proj")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(list).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let value: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    let entries = value["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["message"], "starting up");
}
