// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hook-event telemetry with correlation-id dedup (§3 invariant 9, §4.5).

use std::collections::HashSet;

use ateam_core::{HookEvent, HookEventType, MissionId};

#[derive(Debug, Default)]
pub struct HookState {
    events: Vec<HookEvent>,
    /// Partial unique index: only events with a correlation id participate.
    dedup: HashSet<(String, HookEventType)>,
}

impl HookState {
    /// Insert `event` unless its `(correlationId, eventType)` was already seen.
    /// Returns `true` if inserted, `false` if skipped as a duplicate.
    pub fn insert(&mut self, event: HookEvent) -> bool {
        if let Some(key) = event.dedup_key() {
            let key = (key.0.to_string(), key.1);
            if !self.dedup.insert(key) {
                return false;
            }
        }
        self.events.push(event);
        true
    }

    pub fn list(&self) -> &[HookEvent] {
        &self.events
    }

    /// Remove events older than `older_than_ms`, except those linked to
    /// `keep_mission` (the project's non-archived mission, if any). Returns
    /// the count removed.
    pub fn prune(&mut self, older_than_ms: u64, keep_mission: Option<&MissionId>) -> usize {
        let before = self.events.len();
        self.events.retain(|event| {
            let keep_recent = event.timestamp_ms >= older_than_ms;
            let keep_linked = match (&event.mission_id, keep_mission) {
                (Some(event_mission), Some(current)) => event_mission == current,
                _ => false,
            };
            keep_recent || keep_linked
        });
        before - self.events.len()
    }
}
