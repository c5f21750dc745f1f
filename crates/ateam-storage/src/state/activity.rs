// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only activity feed (§4.7).

use ateam_core::{ActivityEntry, MissionId};

#[derive(Debug, Default)]
pub struct ActivityState {
    entries: Vec<ActivityEntry>,
}

impl ActivityState {
    pub fn append(&mut self, entry: ActivityEntry) {
        self.entries.push(entry);
    }

    /// Newest-first, optionally filtered to one mission, capped at `limit`.
    pub fn list(&self, mission_id: Option<&MissionId>, limit: usize) -> Vec<&ActivityEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| mission_id.map_or(true, |m| e.mission_id.as_ref() == Some(m)))
            .take(limit)
            .collect()
    }
}
