// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event kinds fanned out by the event broker (§4.4, §6.3).
//!
//! Serializes as `{"type": "item-moved", "timestamp": "...", "data": {...}}`,
//! matching the wire event envelope.

use serde::{Deserialize, Serialize};

use crate::activity::ActivityEntry;
use crate::hook::HookEvent;
use crate::item::{Item, ItemId};
use crate::mission::{
    DocumentationState, FinalReviewState, Mission, MissionId, PostChecksState,
};
use crate::stage::Stage;

/// A board delta or lifecycle notification, fanned out to every subscriber
/// of a project's topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all_fields = "camelCase")]
pub enum BoardEvent {
    #[serde(rename = "item-added")]
    ItemAdded { item: Item },

    #[serde(rename = "item-moved")]
    ItemMoved { item_id: ItemId, from_stage: Stage, to_stage: Stage, item: Item },

    #[serde(rename = "item-updated")]
    ItemUpdated { item: Item },

    #[serde(rename = "item-deleted")]
    ItemDeleted { item_id: ItemId },

    #[serde(rename = "board-updated")]
    BoardUpdated,

    #[serde(rename = "activity-entry-added")]
    ActivityEntryAdded { entry: ActivityEntry },

    #[serde(rename = "mission-completed")]
    MissionCompleted { mission: Mission },

    #[serde(rename = "final-review-started")]
    FinalReviewStarted { mission_id: MissionId },

    #[serde(rename = "final-review-complete")]
    FinalReviewComplete { mission_id: MissionId, state: FinalReviewState },

    #[serde(rename = "post-checks-started")]
    PostChecksStarted { mission_id: MissionId },

    #[serde(rename = "post-check-update")]
    PostCheckUpdate { mission_id: MissionId, update: String },

    #[serde(rename = "post-checks-complete")]
    PostChecksComplete { mission_id: MissionId, state: PostChecksState },

    #[serde(rename = "documentation-started")]
    DocumentationStarted { mission_id: MissionId },

    #[serde(rename = "documentation-complete")]
    DocumentationComplete { mission_id: MissionId, state: DocumentationState },

    #[serde(rename = "hook-event")]
    HookEventRecorded { events: Vec<HookEvent> },
}

impl BoardEvent {
    /// Tag string used for logging and as the SSE `type` field when a
    /// caller needs it outside the serialized envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            BoardEvent::ItemAdded { .. } => "item-added",
            BoardEvent::ItemMoved { .. } => "item-moved",
            BoardEvent::ItemUpdated { .. } => "item-updated",
            BoardEvent::ItemDeleted { .. } => "item-deleted",
            BoardEvent::BoardUpdated => "board-updated",
            BoardEvent::ActivityEntryAdded { .. } => "activity-entry-added",
            BoardEvent::MissionCompleted { .. } => "mission-completed",
            BoardEvent::FinalReviewStarted { .. } => "final-review-started",
            BoardEvent::FinalReviewComplete { .. } => "final-review-complete",
            BoardEvent::PostChecksStarted { .. } => "post-checks-started",
            BoardEvent::PostCheckUpdate { .. } => "post-check-update",
            BoardEvent::PostChecksComplete { .. } => "post-checks-complete",
            BoardEvent::DocumentationStarted { .. } => "documentation-started",
            BoardEvent::DocumentationComplete { .. } => "documentation-complete",
            BoardEvent::HookEventRecorded { .. } => "hook-event",
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
