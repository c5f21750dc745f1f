// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent tool-use telemetry ("hook events", §4.5).

use serde::{Deserialize, Serialize};

use crate::agent::AgentName;
use crate::mission::MissionId;
use crate::project::ProjectId;

/// Fixed enum of hook event types. An unrecognized type in a submitted
/// batch rejects the whole batch (§4.5 step 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookEventType {
    PreToolUse,
    PostToolUse,
    PostToolUseFailure,
    SessionStart,
    SessionEnd,
    Notification,
    Stop,
}

crate::simple_display! {
    HookEventType {
        PreToolUse => "pre_tool_use",
        PostToolUse => "post_tool_use",
        PostToolUseFailure => "post_tool_use_failure",
        SessionStart => "session_start",
        SessionEnd => "session_end",
        Notification => "notification",
        Stop => "stop",
    }
}

impl HookEventType {
    /// Paired with `PreToolUse` for duration computation (§4.5 duration pairing).
    pub fn is_post_tool_use(self) -> bool {
        matches!(self, HookEventType::PostToolUse | HookEventType::PostToolUseFailure)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookEvent {
    pub project_id: ProjectId,
    pub event_type: HookEventType,
    pub agent: AgentName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_id: Option<MissionId>,
    pub timestamp_ms: u64,
}

impl HookEvent {
    /// The dedup key (§3 invariant 9, §6.5): `(correlationId, eventType)`,
    /// scoped to a project. Events without a correlation id are never deduped.
    pub fn dedup_key(&self) -> Option<(&str, HookEventType)> {
        self.correlation_id.as_deref().map(|c| (c, self.event_type))
    }
}

/// A read-side view joining a `pre_tool_use`/`post_tool_use` pair by
/// correlation id (§4.5 duration pairing — never stored on the row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookEventWithDuration {
    #[serde(flatten)]
    pub event: HookEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
