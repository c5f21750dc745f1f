// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only per-item work log (§3).

use serde::{Deserialize, Serialize};

use crate::agent::AgentName;
use crate::item::ItemId;
use crate::project::ProjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLogAction {
    Started,
    Completed,
    Rejected,
    Note,
}

crate::simple_display! {
    WorkLogAction {
        Started => "started",
        Completed => "completed",
        Rejected => "rejected",
        Note => "note",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogEntry {
    pub project_id: ProjectId,
    pub item_id: ItemId,
    pub agent: AgentName,
    pub action: WorkLogAction,
    pub summary: String,
    pub timestamp_ms: u64,
}
