// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/api/board*` (§6.1, §4.1, §4.2).

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use ateam_wire::board::{
    BoardQuery, BoardSnapshotDto, ClaimItemRequest, MoveItemRequest, ReleaseItemRequest, WipLimitEntry,
};
use ateam_wire::ApiResponse;

use crate::error::ApiError;
use crate::middleware::ProjectScope;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/board", axum::routing::get(get_board))
        .route("/api/board/move", post(move_item))
        .route("/api/board/claim", post(claim_item))
        .route("/api/board/release", post(release_item))
}

async fn get_board(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> impl IntoResponse {
    let snapshot = state.engine.get_board_state(&project, query.include_completed);
    let dto = BoardSnapshotDto {
        stages: snapshot.wip_limits.into_iter().map(|(stage, limit)| WipLimitEntry { stage, wip_limit: limit.0 }).collect(),
        items: snapshot.items,
        claims: snapshot.claims,
        current_mission: snapshot.current_mission,
    };
    Json(ApiResponse::ok(dto))
}

async fn move_item(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<MoveItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.engine.move_item(&project, &req.item_id, req.to_stage, req.force, req.acting_agent.as_deref())?;
    Ok(Json(ApiResponse::ok(item)))
}

async fn claim_item(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<ClaimItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let claim = state.engine.claim(&project, &req.item_id, &req.agent)?;
    Ok(Json(ApiResponse::ok(claim)))
}

async fn release_item(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<ReleaseItemRequest>,
) -> impl IntoResponse {
    state.engine.release(&project, &req.item_id);
    Json(ApiResponse::ok(()))
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
