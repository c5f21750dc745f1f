// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/api/items*` (§6.1, §4.1).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{patch, post};
use axum::{Json, Router};

use ateam_core::{ItemId, ItemPatch, NewItem};
use ateam_wire::board::RejectItemRequest;
use ateam_wire::ApiResponse;

use crate::error::ApiError;
use crate::middleware::ProjectScope;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/items", axum::routing::get(list_items).post(create_item))
        .route("/api/items/{id}", patch(update_item))
        .route("/api/items/{id}/reject", post(reject_item))
}

async fn list_items(ProjectScope(project): ProjectScope, State(state): State<AppState>) -> impl IntoResponse {
    let items = state.engine.store().list_items(&project);
    Json(ApiResponse::ok(items))
}

async fn create_item(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Json(req): Json<NewItem>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.engine.create_item(&project, req)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

async fn update_item(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(patch): Json<ItemPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.engine.update_item(&project, &id, patch)?;
    Ok(Json(ApiResponse::ok(item)))
}

async fn reject_item(
    ProjectScope(project): ProjectScope,
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(req): Json<RejectItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.engine.reject_item(&project, &id, req.reason, &req.agent)?;
    Ok(Json(ApiResponse::ok(item)))
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;
