// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mission lifecycle: the top-level unit of work for a project (§4.3).

use serde::{Deserialize, Serialize};

use crate::item::ItemId;
use crate::project::ProjectId;

crate::define_id! {
    /// Unique identifier for a mission.
    pub struct MissionId("msn-");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionState {
    Initializing,
    Prechecking,
    Running,
    Postchecking,
    Completed,
    Failed,
    Archived,
}

crate::simple_display! {
    MissionState {
        Initializing => "initializing",
        Prechecking => "prechecking",
        Running => "running",
        Postchecking => "postchecking",
        Completed => "completed",
        Failed => "failed",
        Archived => "archived",
    }
}

impl MissionState {
    /// `archived` is absorbing (invariant 8); every other state is
    /// reachable from it only through a brand-new mission.
    pub fn is_terminal(self) -> bool {
        matches!(self, MissionState::Archived)
    }
}

/// Outcome of a precheck or postcheck run, as recorded verbatim (§4.3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub passed: bool,
    #[serde(default)]
    pub checks: Vec<CheckOutcome>,
    pub ran_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Optional completion sub-records driving the UI's completion panel
/// (§4.3, §6.3). The core persists these verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_review: Option<FinalReviewState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_checks: Option<PostChecksState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<DocumentationState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReviewState {
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChecksState {
    pub complete: bool,
    #[serde(default)]
    pub updates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationState {
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// The top-level unit of work for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    pub project_id: ProjectId,
    pub name: String,
    pub prd_path: String,
    pub state: MissionState,
    pub started_at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precheck: Option<CheckResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcheck: Option<CheckResult>,
    #[serde(default)]
    pub completion: CompletionState,
}

impl Mission {
    pub fn is_archived(&self) -> bool {
        self.state.is_terminal()
    }
}

/// A mission-to-item link (many-to-many, §3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionItem {
    pub mission_id: MissionId,
    pub item_id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at_ms: Option<u64>,
}

#[cfg(test)]
#[path = "mission_tests.rs"]
mod tests;
