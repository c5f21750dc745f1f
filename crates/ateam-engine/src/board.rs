// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Board engine: stage transitions, WIP enforcement, dependency gating (§4.1).

use ateam_core::{
    AgentClaim, BoardEvent, Clock, Item, ItemId, ItemPatch, Mission, NewItem, ProjectId, Stage,
    WipLimit,
};

use crate::errors::EngineError;
use crate::graph;
use crate::Engine;

/// A read-only snapshot of a project's board (`GET /api/board`).
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub items: Vec<Item>,
    pub claims: Vec<AgentClaim>,
    pub current_mission: Option<Mission>,
    pub wip_limits: Vec<(Stage, WipLimit)>,
}

impl<C: Clock> Engine<C> {
    pub fn get_board_state(&self, project: &ProjectId, include_completed: bool) -> BoardSnapshot {
        let mut items = self.store().list_items(project);
        if !include_completed {
            items.retain(|item| item.stage != Stage::Done);
        }
        let claims = items.iter().filter_map(|item| self.store().claim_on_item(project, &item.id)).collect();
        let current_mission = self.store().current_mission(project);
        let wip_limits = Stage::ALL.iter().map(|&stage| (stage, self.store().wip_limit(stage))).collect();
        BoardSnapshot { items, claims, current_mission, wip_limits }
    }

    /// Create an item in `briefings`. Validates dependency targets, cycle
    /// freedom, and output collisions before writing anything (§4.1).
    pub fn create_item(&self, project: &ProjectId, new_item: NewItem) -> Result<Item, EngineError> {
        let now = self.clock.epoch_ms();
        let item = Item {
            id: ItemId::new(),
            project_id: project.clone(),
            title: new_item.title,
            description: new_item.description,
            item_type: new_item.item_type,
            priority: new_item.priority,
            stage: Stage::Briefings,
            assigned_agent: None,
            rejection_count: 0,
            outputs: new_item.outputs,
            created_at_ms: now,
            updated_at_ms: now,
            completed_at_ms: None,
            archived_at_ms: None,
        };

        let declared_deps: Vec<ItemId> = new_item.dependencies.clone();

        let edges = self.store().all_edges(project);
        for dep in &declared_deps {
            self.store().get_item(project, dep).map_err(|_| {
                EngineError::Validation(format!("dependency {dep} does not exist in this project"))
            })?;
            if let Some(cycle) = graph::find_cycle_with_candidate(&edges, item.id, *dep) {
                return Err(EngineError::DependencyCycle {
                    cycle: cycle.iter().map(|id| id.to_string()).collect(),
                });
            }
        }
        let siblings = self.store().list_items(project);
        if let Some((path, other)) = graph::find_output_collision(&item, &siblings, |a, b| {
            a == item.id && declared_deps.contains(&b)
        }) {
            return Err(EngineError::OutputCollision { path, items: vec![item.id.to_string(), other.to_string()] });
        }

        self.store().insert_item(project, item.clone());
        for dep in new_item.dependencies {
            self.store().add_dependency(project, item.id, dep)?;
        }

        self.broker().publish(project, BoardEvent::ItemAdded { item: item.clone() });
        self.broker().publish(project, BoardEvent::BoardUpdated);
        Ok(item)
    }

    pub fn update_item(&self, project: &ProjectId, id: &ItemId, patch: ItemPatch) -> Result<Item, EngineError> {
        if let Some(outputs) = &patch.outputs {
            let mut candidate = self.store().get_item(project, id)?;
            candidate.outputs = outputs.clone();
            let others: Vec<Item> =
                self.store().list_items(project).into_iter().filter(|item| item.id != *id).collect();
            let deps = self.store().dependencies_of(project, *id);
            if let Some((path, other)) = graph::find_output_collision(&candidate, &others, |a, b| {
                a == candidate.id && deps.contains(&b)
            }) {
                return Err(EngineError::OutputCollision { path, items: vec![id.to_string(), other.to_string()] });
            }
        }

        let now = self.clock.epoch_ms();
        let item = self.store().update_item(project, id, |item| {
            if let Some(title) = patch.title {
                item.title = title;
            }
            if let Some(description) = patch.description {
                item.description = description;
            }
            if let Some(item_type) = patch.item_type {
                item.item_type = item_type;
            }
            if let Some(priority) = patch.priority {
                item.priority = priority;
            }
            if let Some(outputs) = patch.outputs {
                item.outputs = outputs;
            }
            item.updated_at_ms = now;
        })?;

        self.broker().publish(project, BoardEvent::ItemUpdated { item: item.clone() });
        Ok(item)
    }

    /// Move an item to a new stage (§4.1 transition matrix, §4.2 implicit
    /// claim release/acquire).
    pub fn move_item(
        &self,
        project: &ProjectId,
        id: &ItemId,
        to: Stage,
        force: bool,
        acting_agent: Option<&str>,
    ) -> Result<Item, EngineError> {
        let item = self.store().get_item(project, id)?;
        let from = item.stage;

        if !force && !from.can_move_to(to) {
            return Err(EngineError::InvalidTransition {
                from: stage_name(from),
                to: stage_name(to),
                allowed: from.allowed_moves().iter().map(|&s| stage_name(s)).collect(),
            });
        }

        if !force && from == Stage::Briefings && to == Stage::Ready {
            let deps = self.store().dependencies_of(project, *id);
            let stages: std::collections::HashMap<ItemId, Stage> =
                deps.iter().filter_map(|d| self.store().get_item(project, d).ok().map(|i| (*d, i.stage))).collect();
            if !graph::is_ready(&deps, |dep| stages.get(&dep).copied()) {
                let unmet = deps.iter().filter(|d| stages.get(d).copied() != Some(Stage::Done)).count() as u32;
                return Err(EngineError::NotReady { item: *id, unmet });
            }
        }

        if let WipLimit(Some(limit)) = self.store().wip_limit(to) {
            let current = self.store().count_active_in_stage(project, to);
            let count_after = if from == to { current } else { current + 1 };
            if count_after > limit {
                return Err(EngineError::WipLimitExceeded { stage: stage_name(to), limit, current });
            }
        }

        if let Some(claim) = self.store().claim_on_item(project, id) {
            let kept_by_mover = acting_agent == Some(claim.agent.as_str());
            if !kept_by_mover {
                self.store().release_claim(project, id);
            }
        }

        let now = self.clock.epoch_ms();
        let item = self.store().update_item(project, id, |item| {
            item.stage = to;
            item.updated_at_ms = now;
            if to == Stage::Done {
                item.completed_at_ms = Some(now);
            }
            if to == Stage::Review {
                item.assigned_agent = None;
            }
        })?;

        // An explicit mover claims atomically with the move, but only onto
        // an otherwise-unclaimed item and never into a terminal stage (§4.2).
        let item = match acting_agent {
            Some(agent)
                if self.store().claim_on_item(project, id).is_none()
                    && to != Stage::Done
                    && to != Stage::Blocked =>
            {
                self.claim_internal(project, id, agent)?
            }
            _ => item,
        };

        self.broker().publish(
            project,
            BoardEvent::ItemMoved { item_id: *id, from_stage: from, to_stage: to, item: item.clone() },
        );
        self.broker().publish(project, BoardEvent::BoardUpdated);
        Ok(item)
    }

    /// Reject an item out of `review` (§4.1 resolved reject semantics).
    /// Always targets `review -> implementing`; never infers `blocked`.
    pub fn reject_item(
        &self,
        project: &ProjectId,
        id: &ItemId,
        reason: String,
        agent: &str,
    ) -> Result<Item, EngineError> {
        let item = self.store().get_item(project, id)?;
        if item.stage != Stage::Review {
            return Err(EngineError::InvalidTransition {
                from: stage_name(item.stage),
                to: stage_name(Stage::Implementing),
                allowed: vec![],
            });
        }

        self.store().release_claim(project, id);

        let now = self.clock.epoch_ms();
        let item = self.store().update_item(project, id, |item| {
            item.rejection_count += 1;
            item.stage = Stage::Implementing;
            item.assigned_agent = None;
            item.updated_at_ms = now;
        })?;

        self.store().append_work_log(
            project,
            ateam_core::WorkLogEntry {
                project_id: project.clone(),
                item_id: *id,
                agent: agent.to_string(),
                action: ateam_core::WorkLogAction::Rejected,
                summary: reason,
                timestamp_ms: now,
            },
        );

        self.broker().publish(
            project,
            BoardEvent::ItemMoved {
                item_id: *id,
                from_stage: Stage::Review,
                to_stage: Stage::Implementing,
                item: item.clone(),
            },
        );
        self.broker().publish(project, BoardEvent::BoardUpdated);
        Ok(item)
    }

    pub fn readiness(&self, project: &ProjectId) -> crate::graph::Readiness {
        let items = self.store().list_items(project);
        let store = self.store();
        graph::compute_readiness(&items, |item| store.dependencies_of(project, item))
    }

    pub fn wip_limit(&self, stage: Stage) -> WipLimit {
        self.store().wip_limit(stage)
    }

    pub fn set_wip_limit(&self, stage: Stage, limit: WipLimit) {
        self.store().set_wip_limit(stage, limit);
    }
}

fn stage_name(stage: Stage) -> &'static str {
    match stage {
        Stage::Briefings => "briefings",
        Stage::Ready => "ready",
        Stage::Testing => "testing",
        Stage::Implementing => "implementing",
        Stage::Probing => "probing",
        Stage::Review => "review",
        Stage::Done => "done",
        Stage::Blocked => "blocked",
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
