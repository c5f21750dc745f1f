// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request/response DTOs for `/api/board*` (§6.1).

use ateam_core::{AgentClaim, Item, ItemId, Mission, Stage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardQuery {
    #[serde(default)]
    pub include_completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveItemRequest {
    pub item_id: ItemId,
    pub to_stage: Stage,
    #[serde(default)]
    pub force: bool,
    #[serde(default)]
    pub acting_agent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItemRequest {
    pub item_id: ItemId,
    pub agent: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseItemRequest {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectItemRequest {
    pub reason: String,
    pub agent: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WipLimitEntry {
    pub stage: Stage,
    pub wip_limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshotDto {
    pub stages: Vec<WipLimitEntry>,
    pub items: Vec<Item>,
    pub claims: Vec<AgentClaim>,
    pub current_mission: Option<Mission>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagePatchRequest {
    pub wip_limit: Option<u32>,
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
