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
    let project = ateam_core::ProjectId::normalize("hooks-proj").unwrap();
    engine.store().ensure_project(&project, 0);
    crate::build_router(AppState::new(engine))
}

#[tokio::test]
async fn ingest_a_batch_of_hook_events() {
    let app = app();
    let body = r#"[
        {"eventType": "pre_tool_use", "agent": "Hannibal", "status": "ok", "timestampMs": 1},
        {"eventType": "post_tool_use", "agent": "Hannibal", "status": "ok", "timestampMs": 2}
    ]"#;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/hooks/events")
        .header("X-Project-ID", "hooks-proj")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let value: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(value["data"]["created"], 2);

    let prune = Request::builder()
        .method(Method::POST)
        .uri("/api/hooks/events/prune")
        .header("X-Project-ID", "hooks-proj")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"olderThanMs": 10}"#))
        .unwrap();
    let response = app.oneshot(prune).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let value: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(value["data"]["pruned"], 2);
}
