// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request DTOs for `/api/missions*` (§6.1, §4.3).

use ateam_core::{CheckOutcome, ItemId, Mission};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMissionRequest {
    pub name: String,
    pub prd_path: String,
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecheckRequest {
    #[serde(default)]
    pub checks: Vec<CheckOutcome>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcheckRequest {
    #[serde(default)]
    pub checks: Vec<CheckOutcome>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveMissionRequest {
    #[serde(default)]
    pub item_ids: Option<Vec<ItemId>>,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub dry_run: bool,
}

/// Response shape for `POST /api/missions/archive`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveMissionResponse {
    pub mission: Mission,
    pub archived_items: Vec<ItemId>,
    pub dry_run: bool,
}
