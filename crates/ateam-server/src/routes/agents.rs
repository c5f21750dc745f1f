// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/api/agents/*` (§6.1, §4.2). `task_id` travels with the request only
//! for client-side correlation; the claim manager has no field for it.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use ateam_engine::StopOutcome;
use ateam_wire::agents::{AgentStartRequest, AgentStopRequest, StopOutcomeWire};
use ateam_wire::ApiResponse;

use crate::error::ApiError;
use crate::middleware::ProjectScope;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/agents/start", post(start)).route("/api/agents/stop", post(stop))
}

async fn start(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<AgentStartRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let claim = state.engine.claim(&project, &req.item_id, &req.agent)?;
    Ok(Json(ApiResponse::ok(claim)))
}

async fn stop(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<AgentStopRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = match req.outcome {
        StopOutcomeWire::Completed => StopOutcome::Completed,
        StopOutcomeWire::Blocked => StopOutcome::Blocked,
    };
    let item = state.engine.stop(&project, &req.item_id, &req.agent, req.summary, outcome)?;
    Ok(Json(ApiResponse::ok(item)))
}

#[cfg(test)]
#[path = "agents_tests.rs"]
mod tests;
