// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `GET|POST /api/projects` (§6.1). Unscoped: these are the only endpoints
//! that don't require `X-Project-ID`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use ateam_core::{Project, ProjectId};
use ateam_wire::ApiResponse;

use crate::error::ApiError;
use crate::state::AppState;
use ateam_wire::projects::CreateProjectRequest;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/projects", get(list_projects).post(create_project))
}

async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    let projects: Vec<Project> = state.engine.store().list_projects();
    Json(ApiResponse::ok(projects))
}

async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ProjectId::normalize(&req.id)?;
    let name = req.name.unwrap_or_else(|| id.as_str().to_string());
    let project = state.engine.store().create_project(id, name, state.engine.now_ms())?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(project))))
}

#[cfg(test)]
#[path = "projects_tests.rs"]
mod tests;
