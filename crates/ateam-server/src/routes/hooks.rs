// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/api/hooks/events*` (§6.1, §4.5).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use ateam_core::HookEvent;
use ateam_wire::hooks::{HookEventsRequest, NewHookEvent, PruneHookEventsRequest};
use ateam_wire::ApiResponse;

use crate::error::ApiError;
use crate::middleware::ProjectScope;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/hooks/events", post(ingest_events))
        .route("/api/hooks/events/prune", post(prune_events))
}

fn to_core(project: &ateam_core::ProjectId, event: NewHookEvent) -> HookEvent {
    HookEvent {
        project_id: project.clone(),
        event_type: event.event_type,
        agent: event.agent,
        tool: event.tool,
        status: event.status,
        summary: event.summary,
        correlation_id: event.correlation_id,
        mission_id: event.mission_id,
        timestamp_ms: event.timestamp_ms,
    }
}

async fn ingest_events(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<HookEventsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let events = req.into_events().into_iter().map(|event| to_core(&project, event)).collect();
    let outcome = state.engine.ingest_hook_events(&project, events)?;
    Ok(Json(ApiResponse::ok(json!({ "created": outcome.created, "skipped": outcome.skipped }))))
}

async fn prune_events(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<PruneHookEventsRequest>,
) -> impl IntoResponse {
    let pruned = state.engine.prune_hook_events(&project, req.older_than_ms);
    Json(ApiResponse::ok(json!({ "pruned": pruned })))
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
