// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end scenarios exercised against the full HTTP surface, one
//! in-process `axum::Router` per test.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use ateam_broker::EventBroker;
use ateam_core::SystemClock;
use ateam_engine::Engine;
use ateam_server::AppState;
use ateam_storage::Store;

fn app() -> axum::Router {
    let engine = Engine::new(Arc::new(Store::default()), EventBroker::new(16, Duration::from_secs(30)), SystemClock);
    ateam_server::build_router(AppState::new(engine))
}

async fn request(
    app: &axum::Router,
    method: Method,
    uri: &str,
    project: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Project-ID", project)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &axum::Router, uri: &str, project: &str) -> (StatusCode, Value) {
    request(app, Method::GET, uri, project, Value::Null).await
}

#[tokio::test]
async fn happy_path_single_item_moves_through_the_board() {
    let app = app();

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/missions",
        "p1",
        json!({"name": "launch", "prdPath": "docs/prd.md"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/items",
        "p1",
        json!({"title": "ship it", "itemType": "feature", "priority": "high"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/board/move",
        "p1",
        json!({"itemId": item_id, "toStage": "ready"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/board/move",
        "p1",
        json!({"itemId": item_id, "toStage": "testing"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/agents/start",
        "p1",
        json!({"itemId": item_id, "agent": "Murdock"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, stopped) = request(
        &app,
        Method::POST,
        "/api/agents/stop",
        "p1",
        json!({"itemId": item_id, "agent": "Murdock", "summary": "tests pass", "outcome": "completed"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stopped["data"]["stage"], "review");
    assert!(stopped["data"]["assignedAgent"].is_null());

    for (agent, to_stage) in [("Lynch", "probing"), ("Amy", "done")] {
        let (status, _) =
            request(&app, Method::POST, "/api/board/claim", "p1", json!({"itemId": item_id, "agent": agent})).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) =
            request(&app, Method::POST, "/api/board/release", "p1", json!({"itemId": item_id})).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = request(
            &app,
            Method::POST,
            "/api/board/move",
            "p1",
            json!({"itemId": item_id, "toStage": to_stage}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, board) = get(&app, "/api/board?includeCompleted=true", "p1").await;
    assert_eq!(status, StatusCode::OK);
    let items = board["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["stage"], "done");
    assert!(items[0]["completedAtMs"].is_number());
    assert!(board["data"]["claims"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn wip_limit_blocks_a_third_item_until_one_moves_on() {
    let app = app();
    request(&app, Method::PATCH, "/api/stages/testing", "p1", json!({"wipLimit": 2})).await;

    let mut ids = Vec::new();
    for title in ["one", "two", "three"] {
        let (_, created) = request(
            &app,
            Method::POST,
            "/api/items",
            "p1",
            json!({"title": title, "itemType": "task", "priority": "medium"}),
        )
        .await;
        ids.push(created["data"]["id"].as_str().unwrap().to_string());
    }

    for id in &ids {
        let (status, _) =
            request(&app, Method::POST, "/api/board/move", "p1", json!({"itemId": id, "toStage": "ready"})).await;
        assert_eq!(status, StatusCode::OK);
    }

    for id in &ids[..2] {
        let (status, _) =
            request(&app, Method::POST, "/api/board/move", "p1", json!({"itemId": id, "toStage": "testing"})).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, error) = request(
        &app,
        Method::POST,
        "/api/board/move",
        "p1",
        json!({"itemId": ids[2], "toStage": "testing"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["error"]["code"], "WIP_LIMIT_EXCEEDED");
    assert_eq!(error["error"]["details"]["limit"], 2);
    assert_eq!(error["error"]["details"]["current"], 2);

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/board/move",
        "p1",
        json!({"itemId": ids[0], "toStage": "implementing"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/board/move",
        "p1",
        json!({"itemId": ids[2], "toStage": "testing"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn the_second_claim_of_an_item_is_a_conflict_not_a_double_claim() {
    let app = app();
    let (_, created) = request(
        &app,
        Method::POST,
        "/api/items",
        "p1",
        json!({"title": "contested", "itemType": "task", "priority": "medium"}),
    )
    .await;
    let item_id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, _) =
        request(&app, Method::POST, "/api/board/claim", "p1", json!({"itemId": item_id, "agent": "Murdock"})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, error) =
        request(&app, Method::POST, "/api/board/claim", "p1", json!({"itemId": item_id, "agent": "B.A."})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["error"]["code"], "CLAIM_CONFLICT");
    assert_eq!(error["error"]["details"]["claimedBy"], "Murdock");
}

#[tokio::test]
async fn items_do_not_leak_across_projects_and_cross_project_dependencies_are_rejected() {
    let app = app();
    let (_, created) = request(
        &app,
        Method::POST,
        "/api/items",
        "p1",
        json!({"title": "p1 only", "itemType": "task", "priority": "medium"}),
    )
    .await;
    let p1_item = created["data"]["id"].as_str().unwrap().to_string();

    let (status, error) = request(
        &app,
        Method::POST,
        "/api/items",
        "p2",
        json!({"title": "reaches across", "itemType": "task", "priority": "medium", "dependencies": [p1_item]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");

    let (status, listed) = get(&app, "/api/items", "p2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn a_dependency_on_a_nonexistent_item_is_rejected() {
    let app = app();
    let (_, i1) = request(
        &app,
        Method::POST,
        "/api/items",
        "p1",
        json!({"title": "I1", "itemType": "task", "priority": "medium"}),
    )
    .await;
    let i1 = i1["data"]["id"].as_str().unwrap().to_string();

    // I2 depends on I1, which exists; this establishes a real edge.
    let (status, _) = request(
        &app,
        Method::POST,
        "/api/items",
        "p1",
        json!({"title": "I2", "itemType": "task", "priority": "medium", "dependencies": [i1]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = request(
        &app,
        Method::POST,
        "/api/items",
        "p1",
        json!({"title": "I3", "itemType": "task", "priority": "medium", "dependencies": ["does-not-exist"]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn a_subscriber_with_a_full_queue_is_dropped_without_stalling_the_publisher() {
    let broker = EventBroker::new(4, Duration::from_secs(30));
    let project = ateam_core::ProjectId::normalize("p1").unwrap();

    let mut slow = broker.subscribe(project.clone());
    for i in 0..300u32 {
        broker.publish(
            &project,
            ateam_core::BoardEvent::ActivityEntryAdded {
                entry: ateam_core::ActivityEntry {
                    project_id: project.clone(),
                    mission_id: None,
                    agent: None,
                    level: ateam_core::ActivityLevel::Info,
                    message: format!("event {i}"),
                    timestamp_ms: i as u64,
                },
            },
        );
    }

    // The slow subscriber's bounded channel fills and the broker drops it;
    // draining what's left in the channel eventually yields `Closed`.
    let mut saw_closed = false;
    for _ in 0..16 {
        if matches!(slow.next().await, ateam_broker::SubscriptionItem::Closed) {
            saw_closed = true;
            break;
        }
    }
    assert!(saw_closed);

    let fresh = broker.subscribe(project.clone());
    assert_eq!(broker.subscriber_count(&project), 1);
    drop(fresh);
}
