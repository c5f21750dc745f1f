// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only project-scoped activity feed (§4.7).

use serde::{Deserialize, Serialize};

use crate::agent::AgentName;
use crate::mission::MissionId;
use crate::project::ProjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Info,
    Warn,
    Error,
}

impl Default for ActivityLevel {
    fn default() -> Self {
        ActivityLevel::Info
    }
}

crate::simple_display! {
    ActivityLevel {
        Info => "info",
        Warn => "warn",
        Error => "error",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub project_id: ProjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_id: Option<MissionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentName>,
    pub message: String,
    pub level: ActivityLevel,
    pub timestamp_ms: u64,
}
