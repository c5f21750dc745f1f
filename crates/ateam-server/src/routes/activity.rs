// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/api/activity` (§6.1, §4.7).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use ateam_wire::activity::{ActivityQuery, LogActivityRequest};
use ateam_wire::ApiResponse;

use crate::middleware::ProjectScope;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/activity", get(list_activity).post(log_activity))
}

async fn list_activity(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> impl IntoResponse {
    let entries = state.engine.list_activity(&project, query.mission_id, query.limit);
    Json(ApiResponse::ok(entries))
}

async fn log_activity(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<LogActivityRequest>,
) -> impl IntoResponse {
    let entry = state.engine.log(&project, req.mission_id, req.agent, req.message, req.level);
    (StatusCode::CREATED, Json(ApiResponse::ok(entry)))
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
