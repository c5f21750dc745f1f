// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Claim manager: race-free exclusive custody (§4.2).

use ateam_core::{AgentClaim, BoardEvent, Clock, Item, ItemId, ProjectId, Stage, WorkLogAction, WorkLogEntry};

use crate::errors::EngineError;
use crate::Engine;

/// Outcome requested by `agents/stop` (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    Completed,
    Blocked,
}

impl<C: Clock> Engine<C> {
    /// Acquire algorithm (§4.2 steps 1-5). Both uniqueness checks and the
    /// insert happen under the store's single lock acquisition, so two
    /// concurrent claimants on the same item can never both win.
    pub fn claim(&self, project: &ProjectId, item_id: &ItemId, agent: &str) -> Result<AgentClaim, EngineError> {
        let now = self.clock.epoch_ms();
        let claim = self.store().try_claim(project, *item_id, agent, now).map_err(|err| match err {
            ateam_storage::StoreError::ClaimConflict { claimed_by } => {
                EngineError::ClaimConflict { item: *item_id, claimed_by }
            }
            ateam_storage::StoreError::AgentBusy { agent, item } => EngineError::AgentBusy { agent, item },
            other => EngineError::Store(other),
        })?;
        Ok(claim)
    }

    /// Idempotent release: a no-op if the item has no claim (§4.2).
    pub fn release(&self, project: &ProjectId, item_id: &ItemId) {
        if self.store().release_claim(project, item_id).is_none() {
            return;
        }
        if let Ok(item) = self.store().update_item(project, item_id, |item| item.assigned_agent = None) {
            self.broker().publish(project, BoardEvent::ItemUpdated { item });
        }
    }

    /// Combined stop operation (§4.2): verify, work-log, release, move.
    pub fn stop(
        &self,
        project: &ProjectId,
        item_id: &ItemId,
        agent: &str,
        summary: String,
        outcome: StopOutcome,
    ) -> Result<Item, EngineError> {
        let claim = self.store().claim_on_item(project, item_id).ok_or(EngineError::NotClaimed(*item_id))?;
        if claim.agent != agent {
            return Err(EngineError::ClaimMismatch { item: *item_id, claimed_by: claim.agent });
        }

        let now = self.clock.epoch_ms();
        // No dedicated "blocked" work-log action exists (§3); a blocked stop
        // is recorded as a note rather than overloading `rejected`.
        let action = match outcome {
            StopOutcome::Completed => WorkLogAction::Completed,
            StopOutcome::Blocked => WorkLogAction::Note,
        };
        self.store().append_work_log(
            project,
            WorkLogEntry { project_id: project.clone(), item_id: *item_id, agent: agent.to_string(), action, summary, timestamp_ms: now },
        );

        self.store().release_claim(project, item_id);
        let from = self.store().get_item(project, item_id)?.stage;
        let to = match outcome {
            StopOutcome::Completed => Stage::Review,
            StopOutcome::Blocked => Stage::Blocked,
        };

        let item = self.store().update_item(project, item_id, |item| {
            item.assigned_agent = None;
            item.stage = to;
            item.updated_at_ms = now;
            if to == Stage::Done {
                item.completed_at_ms = Some(now);
            }
        })?;

        self.broker().publish(
            project,
            BoardEvent::ItemMoved { item_id: *item_id, from_stage: from, to_stage: to, item: item.clone() },
        );
        self.broker().publish(project, BoardEvent::BoardUpdated);
        Ok(item)
    }

    /// Claim on behalf of a mover, used only by `move_item`'s implicit
    /// acquire (§4.2). Assumes the item is currently unclaimed.
    pub(crate) fn claim_internal(&self, project: &ProjectId, item_id: &ItemId, agent: &str) -> Result<Item, EngineError> {
        let now = self.clock.epoch_ms();
        self.store().try_claim(project, *item_id, agent, now)?;
        Ok(self.store().get_item(project, item_id)?)
    }
}

#[cfg(test)]
#[path = "claims_tests.rs"]
mod tests;
