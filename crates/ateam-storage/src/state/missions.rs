// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mission storage, including the mission-item link table (§3 invariant 8).

use std::collections::HashMap;

use ateam_core::{Mission, MissionId, MissionItem};

#[derive(Debug, Default)]
pub struct MissionState {
    by_id: HashMap<MissionId, Mission>,
    /// `(mission_id, item_id)` link rows; unique per §6.5.
    links: Vec<MissionItem>,
}

impl MissionState {
    pub fn insert(&mut self, mission: Mission) {
        self.by_id.insert(mission.id, mission);
    }

    pub fn get(&self, id: &MissionId) -> Option<&Mission> {
        self.by_id.get(id)
    }

    pub fn get_mut(&mut self, id: &MissionId) -> Option<&mut Mission> {
        self.by_id.get_mut(id)
    }

    /// The project's single non-archived mission, per §4.3 invariant.
    pub fn current(&self) -> Option<&Mission> {
        self.by_id.values().find(|m| !m.is_archived())
    }

    pub fn list(&self) -> Vec<&Mission> {
        let mut missions: Vec<&Mission> = self.by_id.values().collect();
        missions.sort_by(|a, b| a.started_at_ms.cmp(&b.started_at_ms));
        missions
    }

    pub fn link_item(&mut self, mission_id: MissionId, item_id: ateam_core::ItemId) {
        let exists = self.links.iter().any(|l| l.mission_id == mission_id && l.item_id == item_id);
        if !exists {
            self.links.push(MissionItem { mission_id, item_id, archived_at_ms: None });
        }
    }

    pub fn items_of(&self, mission_id: &MissionId) -> impl Iterator<Item = ateam_core::ItemId> + '_ {
        self.links.iter().filter(move |l| l.mission_id == *mission_id).map(|l| l.item_id)
    }

    /// Mark every link row for `mission_id` archived, returning the affected item ids.
    pub fn archive_links(&mut self, mission_id: &MissionId, at_ms: u64) -> Vec<ateam_core::ItemId> {
        let mut affected = Vec::new();
        for link in self.links.iter_mut().filter(|l| l.mission_id == *mission_id) {
            if link.archived_at_ms.is_none() {
                link.archived_at_ms = Some(at_ms);
            }
            affected.push(link.item_id);
        }
        affected
    }
}
