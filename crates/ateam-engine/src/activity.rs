// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Activity log (§4.7): append-only, auto-associated with the current mission.

use ateam_core::{ActivityEntry, ActivityLevel, BoardEvent, Clock, MissionId, ProjectId};

use crate::Engine;

impl<C: Clock> Engine<C> {
    /// Append an entry. When `mission_id` is not given, it is filled in from
    /// the project's current non-archived mission, if any (§4.7).
    pub fn log(
        &self,
        project: &ProjectId,
        mission_id: Option<MissionId>,
        agent: Option<String>,
        message: String,
        level: Option<ActivityLevel>,
    ) -> ActivityEntry {
        let mission_id = mission_id.or_else(|| self.store().current_mission(project).map(|m| m.id));
        let entry = ActivityEntry {
            project_id: project.clone(),
            mission_id,
            agent,
            message,
            level: level.unwrap_or_default(),
            timestamp_ms: self.clock.epoch_ms(),
        };
        self.store().append_activity(project, entry.clone());
        self.broker().publish(project, BoardEvent::ActivityEntryAdded { entry: entry.clone() });
        entry
    }

    /// Newest-first. Defaults to the current mission's entries when
    /// `mission_id` is absent and a mission exists, else the whole project.
    pub fn list_activity(&self, project: &ProjectId, mission_id: Option<MissionId>, limit: usize) -> Vec<ActivityEntry> {
        let mission_id = mission_id.or_else(|| self.store().current_mission(project).map(|m| m.id));
        self.store().list_activity(project, mission_id.as_ref(), limit)
    }
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
