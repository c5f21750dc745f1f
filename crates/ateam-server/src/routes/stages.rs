// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `PATCH /api/stages/{stageId}` (§6.1).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::patch;
use axum::{Json, Router};

use ateam_core::{Stage, WipLimit};
use ateam_wire::board::{StagePatchRequest, WipLimitEntry};
use ateam_wire::ApiResponse;

use crate::error::ApiError;
use crate::middleware::ProjectScope;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/stages/{stage_id}", patch(update_stage))
}

async fn update_stage(
    // Stages are process-global, not project-scoped, but every other
    // route requires the header, so the guard stays uniform here too.
    ProjectScope(_project): ProjectScope,
    State(state): State<AppState>,
    Path(stage_id): Path<String>,
    Json(req): Json<StagePatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    use ateam_core::DomainError;
    use ateam_core::ErrorCode;
    use std::str::FromStr;

    let stage = Stage::from_str(&stage_id)
        .map_err(|_| DomainError::new(ErrorCode::InvalidStage, format!("unknown stage: {stage_id}")))?;
    state.engine.set_wip_limit(stage, WipLimit(req.wip_limit));
    Ok(Json(ApiResponse::ok(WipLimitEntry { stage, wip_limit: req.wip_limit })))
}

#[cfg(test)]
#[path = "stages_tests.rs"]
mod tests;
