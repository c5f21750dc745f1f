// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request DTOs for `/api/agents/*` (§6.1).

use ateam_core::ItemId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStartRequest {
    pub item_id: ItemId,
    pub agent: String,
    #[serde(default)]
    pub task_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopOutcomeWire {
    Completed,
    Blocked,
}

impl Default for StopOutcomeWire {
    fn default() -> Self {
        StopOutcomeWire::Completed
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStopRequest {
    pub item_id: ItemId,
    pub agent: String,
    pub summary: String,
    #[serde(default)]
    pub outcome: StopOutcomeWire,
}
