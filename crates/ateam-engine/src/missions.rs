// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mission lifecycle state machine (§4.3).
//!
//! Marker-file I/O is explicitly out of this crate's hands (§6.4: "opaque to
//! the core... writes it best-effort"); these methods return a [`MarkerAction`]
//! telling the HTTP boundary what to do, rather than touching the filesystem
//! themselves.

use ateam_core::{
    BoardEvent, CheckOutcome, CheckResult, Clock, Item, ItemId, Mission, MissionId, MissionState,
    ProjectId, Stage,
};

use crate::errors::EngineError;
use crate::Engine;

/// Tells the HTTP boundary whether to write or clear the mission-active
/// marker file (§6.4). The engine never touches the filesystem itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerAction {
    Write,
    Clear,
}

/// Result of an archive call, including what it affected (or would affect,
/// for a dry run).
#[derive(Debug, Clone)]
pub struct ArchiveOutcome {
    pub mission: Mission,
    pub archived_items: Vec<ItemId>,
    pub marker_action: Option<MarkerAction>,
}

impl<C: Clock> Engine<C> {
    /// Create a mission. If one is already active, `force` must be set —
    /// the incumbent is archived atomically first (§4.3 invariant).
    ///
    /// Immediately auto-advances `initializing -> prechecking` (the
    /// `mission_init` transition of §4.3's diagram), clearing any stale
    /// marker left behind by a prior run.
    pub fn create_mission(
        &self,
        project: &ProjectId,
        name: String,
        prd_path: String,
        force: bool,
    ) -> Result<(Mission, MarkerAction), EngineError> {
        if self.store.current_mission(project).is_some() {
            if !force {
                return Err(EngineError::Validation(
                    "a mission is already active; pass force=true to replace it".into(),
                ));
            }
            self.archive(project, None, false, false)?;
        }

        let now = self.clock.epoch_ms();
        let mission = Mission {
            id: MissionId::new(),
            project_id: project.clone(),
            name,
            prd_path,
            state: MissionState::Prechecking,
            started_at_ms: now,
            completed_at_ms: None,
            archived_at_ms: None,
            precheck: None,
            postcheck: None,
            completion: Default::default(),
        };
        self.store.insert_mission(project, mission.clone());
        Ok((mission, MarkerAction::Clear))
    }

    pub fn current_mission(&self, project: &ProjectId) -> Option<Mission> {
        self.store.current_mission(project)
    }

    pub fn list_missions(&self, project: &ProjectId) -> Vec<Mission> {
        self.store.list_missions(project)
    }

    /// Evaluate precheck results. Passing moves `prechecking -> running` and
    /// asks the caller to write the marker file; failing moves to `failed`.
    pub fn precheck(
        &self,
        project: &ProjectId,
        checks: Vec<CheckOutcome>,
    ) -> Result<(Mission, Option<MarkerAction>), EngineError> {
        let mission = self.current_mission_or_err(project)?;
        if mission.state != MissionState::Prechecking {
            return Err(EngineError::Validation(format!(
                "mission is {}; precheck only applies while prechecking",
                mission.state
            )));
        }

        let now = self.clock.epoch_ms();
        let passed = checks.iter().all(|c| c.passed);
        let result = CheckResult { passed, checks, ran_at_ms: now };
        let next_state = if passed { MissionState::Running } else { MissionState::Failed };

        let mission = self.store.update_mission(project, &mission.id, |m| {
            m.precheck = Some(result.clone());
            m.state = next_state;
        })?;

        let marker = passed.then_some(MarkerAction::Write);
        Ok((mission, marker))
    }

    /// Evaluate postcheck results. Auto-advances `running -> postchecking`
    /// first when all items are `done`, then evaluates pass/fail.
    ///
    /// A failed postcheck is terminal in `failed` (§4.3 resolved open
    /// question) — it never silently reopens `running`.
    pub fn postcheck(&self, project: &ProjectId, checks: Vec<CheckOutcome>) -> Result<Mission, EngineError> {
        let mission = self.current_mission_or_err(project)?;

        let mission = if mission.state == MissionState::Running {
            let items = self.store.list_items(project);
            if !items.iter().all(|item| item.stage == Stage::Done) {
                return Err(EngineError::Validation(
                    "not every item has reached done; cannot postcheck yet".into(),
                ));
            }
            self.store.update_mission(project, &mission.id, |m| m.state = MissionState::Postchecking)?
        } else if mission.state == MissionState::Postchecking {
            mission
        } else {
            return Err(EngineError::Validation(format!(
                "mission is {}; postcheck only applies while running or postchecking",
                mission.state
            )));
        };

        let now = self.clock.epoch_ms();
        let passed = checks.iter().all(|c| c.passed);
        let result = CheckResult { passed, checks, ran_at_ms: now };
        let next_state = if passed { MissionState::Completed } else { MissionState::Failed };

        let mission = self.store.update_mission(project, &mission.id, |m| {
            m.postcheck = Some(result.clone());
            m.state = next_state;
            if next_state == MissionState::Completed {
                m.completed_at_ms = Some(now);
            }
        })?;

        if next_state == MissionState::Completed {
            self.broker.publish(project, BoardEvent::MissionCompleted { mission: mission.clone() });
        }
        Ok(mission)
    }

    /// Archive the current mission. Idempotent: archiving an already-archived
    /// mission is a success with no state change (§9).
    ///
    /// `item_ids`, when given, limits which linked items get their
    /// `archivedAt` stamped; link rows for the whole mission are still
    /// marked archived (a mission is archived as a unit).
    pub fn archive(
        &self,
        project: &ProjectId,
        item_ids: Option<Vec<ItemId>>,
        complete: bool,
        dry_run: bool,
    ) -> Result<ArchiveOutcome, EngineError> {
        let mission = self.current_mission_or_err(project)?;
        if mission.is_archived() {
            return Ok(ArchiveOutcome { mission, archived_items: Vec::new(), marker_action: None });
        }

        let linked = self.store.items_of_mission(project, &mission.id);
        let targets: Vec<ItemId> = match &item_ids {
            Some(ids) => linked.into_iter().filter(|id| ids.contains(id)).collect(),
            None => linked,
        };

        if dry_run {
            return Ok(ArchiveOutcome { mission, archived_items: targets, marker_action: None });
        }

        let now = self.clock.epoch_ms();
        self.store.archive_mission_links(project, &mission.id, now);
        let mut archived_items = Vec::with_capacity(targets.len());
        for id in &targets {
            let result: Result<Item, EngineError> = self
                .store
                .update_item(project, id, |item| item.archived_at_ms = Some(now))
                .map_err(EngineError::from);
            if result.is_ok() {
                archived_items.push(*id);
            }
        }

        let mission = self.store.update_mission(project, &mission.id, |m| {
            m.state = MissionState::Archived;
            m.archived_at_ms = Some(now);
            if complete && m.completed_at_ms.is_none() {
                m.completed_at_ms = Some(now);
            }
        })?;

        self.broker.publish(project, BoardEvent::BoardUpdated);
        let marker_action = complete.then_some(MarkerAction::Clear);
        Ok(ArchiveOutcome { mission, archived_items, marker_action })
    }

    fn current_mission_or_err(&self, project: &ProjectId) -> Result<Mission, EngineError> {
        self.store
            .current_mission(project)
            .ok_or_else(|| EngineError::Validation("no active mission for this project".into()))
    }
}

#[cfg(test)]
#[path = "missions_tests.rs"]
mod tests;
