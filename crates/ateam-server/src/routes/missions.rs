// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/api/missions*` (§6.1, §4.3, §6.4).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use ateam_wire::missions::{
    ArchiveMissionRequest, ArchiveMissionResponse, CreateMissionRequest, PostcheckRequest, PrecheckRequest,
};
use ateam_wire::ApiResponse;

use crate::error::ApiError;
use crate::marker;
use crate::middleware::ProjectScope;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/missions", get(list_missions).post(create_mission))
        .route("/api/missions/current", get(current_mission))
        .route("/api/missions/precheck", post(precheck))
        .route("/api/missions/postcheck", post(postcheck))
        .route("/api/missions/archive", post(archive))
}

async fn list_missions(ProjectScope(project): ProjectScope, State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.engine.list_missions(&project)))
}

async fn current_mission(ProjectScope(project): ProjectScope, State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.engine.current_mission(&project)))
}

async fn create_mission(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<CreateMissionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (mission, marker_action) = state.engine.create_mission(&project, req.name, req.prd_path, req.force)?;
    marker::apply(marker_action, &project);
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(mission))))
}

async fn precheck(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<PrecheckRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (mission, marker_action) = state.engine.precheck(&project, req.checks)?;
    if let Some(action) = marker_action {
        marker::apply(action, &project);
    }
    Ok(Json(ApiResponse::ok(mission)))
}

async fn postcheck(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<PostcheckRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mission = state.engine.postcheck(&project, req.checks)?;
    Ok(Json(ApiResponse::ok(mission)))
}

async fn archive(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<ArchiveMissionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.engine.archive(&project, req.item_ids, req.complete, req.dry_run)?;
    if let Some(action) = outcome.marker_action {
        marker::apply(action, &project);
    }
    let response = ArchiveMissionResponse {
        mission: outcome.mission,
        archived_items: outcome.archived_items,
        dry_run: req.dry_run,
    };
    Ok(Json(ApiResponse::ok(response)))
}

#[cfg(test)]
#[path = "missions_tests.rs"]
mod tests;
