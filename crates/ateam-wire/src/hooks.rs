// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request DTOs for `/api/hooks/events*` (§6.1, §4.5).

use ateam_core::{HookEventType, MissionId};
use serde::Deserialize;

/// A single submitted hook event, missing only the `projectId` the scope
/// guard attaches server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHookEvent {
    pub event_type: HookEventType,
    pub agent: String,
    #[serde(default)]
    pub tool: Option<String>,
    pub status: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub mission_id: Option<MissionId>,
    pub timestamp_ms: u64,
}

/// `POST /api/hooks/events` accepts either a single event or a batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HookEventsRequest {
    Batch(Vec<NewHookEvent>),
    Single(NewHookEvent),
}

impl HookEventsRequest {
    pub fn into_events(self) -> Vec<NewHookEvent> {
        match self {
            HookEventsRequest::Batch(events) => events,
            HookEventsRequest::Single(event) => vec![event],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PruneHookEventsRequest {
    pub older_than_ms: u64,
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
