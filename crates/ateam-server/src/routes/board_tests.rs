// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ateam_broker::EventBroker;
use ateam_core::{ItemBuilder, SystemClock};
use ateam_engine::Engine;
use ateam_storage::Store;

use super::*;

fn app_with_item() -> (axum::Router, ateam_core::ItemId) {
    let engine = Engine::new(Arc::new(Store::default()), EventBroker::new(16, Duration::from_secs(30)), SystemClock);
    let project = ateam_core::ProjectId::normalize("board-proj").unwrap();
    engine.store().ensure_project(&project, 0);
    let item = ItemBuilder::new().project_id(project.clone()).build();
    engine.store().insert_item(&project, item.clone());
    let state = AppState::new(engine);
    (crate::build_router(state), item.id)
}

#[tokio::test]
async fn get_board_lists_the_item_with_its_wip_limits() {
    let (app, _) = app_with_item();
    let response = app
        .oneshot(Request::builder().uri("/api/board").header("X-Project-ID", "board-proj").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(value["data"]["stages"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn move_item_advances_its_stage() {
    let (app, item_id) = app_with_item();
    let body = format!(r#"{{"itemId": "{item_id}", "toStage": "ready"}}"#);
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/board/move")
                .header("X-Project-ID", "board-proj")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let value: serde_json::Value =
        serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes()).unwrap();
    assert_eq!(value["data"]["stage"], "ready");
}

#[tokio::test]
async fn claim_then_release_frees_the_item_again() {
    let (app, item_id) = app_with_item();
    let claim_body = format!(r#"{{"itemId": "{item_id}", "agent": "Murdock"}}"#);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/board/claim")
                .header("X-Project-ID", "board-proj")
                .header("content-type", "application/json")
                .body(Body::from(claim_body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let release_body = format!(r#"{{"itemId": "{item_id}"}}"#);
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/board/release")
                .header("X-Project-ID", "board-proj")
                .header("content-type", "application/json")
                .body(Body::from(release_body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
