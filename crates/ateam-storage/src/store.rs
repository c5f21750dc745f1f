// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The project-scoped storage contract (§4.6, §6.5).
//!
//! Every read and write is keyed by a [`ProjectId`]; an item, claim, or edge
//! simply does not exist from another project's point of view, which is how
//! cross-project isolation is enforced by construction rather than by a
//! runtime check.

use std::collections::HashMap;

use ateam_core::{
    AgentClaim, ActivityEntry, HookEvent, Item, ItemId, Mission, MissionId, Project,
    ProjectId, Stage, WipLimit, WorkLogEntry,
};
use parking_lot::Mutex;

use crate::error::StoreError;
use crate::retry::RetryPolicy;
use crate::state::ProjectState;

struct Inner {
    projects: HashMap<ProjectId, Project>,
    states: HashMap<ProjectId, ProjectState>,
    wip_limits: HashMap<Stage, WipLimit>,
}

impl Default for Inner {
    fn default() -> Self {
        let mut wip_limits = HashMap::new();
        for stage in Stage::ALL {
            wip_limits.insert(stage, WipLimit::UNLIMITED);
        }
        Self { projects: HashMap::new(), states: HashMap::new(), wip_limits }
    }
}

/// An in-memory, project-partitioned store standing in for the persistence
/// layout of §6.5. Not durable across restarts (by design, per the
/// event-replay non-goal); every write is transactional within this process.
pub struct Store {
    retry: RetryPolicy,
    inner: Mutex<Inner>,
}

impl Store {
    pub fn new(retry: RetryPolicy) -> Self {
        Self { retry, inner: Mutex::new(Inner::default()) }
    }

    // ---- projects (§4.6 scope guard) ----------------------------------

    /// Create the project row if it doesn't exist yet; otherwise return the
    /// existing one (create-on-first-use, §4.6 step 4).
    pub fn ensure_project(&self, id: &ProjectId, now_ms: u64) -> Project {
        self.retry
            .run(|| {
                let mut inner = self.inner.lock();
                if let Some(project) = inner.projects.get(id) {
                    return Ok(project.clone());
                }
                let project = Project::new_default(id.clone(), now_ms);
                inner.projects.insert(id.clone(), project.clone());
                inner.states.entry(id.clone()).or_default();
                Ok(project)
            })
            .expect("ensure_project never fails")
    }

    /// Explicit creation via `POST /api/projects`; `CONFLICT` if the
    /// (already-normalized) identifier is taken.
    pub fn create_project(&self, id: ProjectId, name: String, now_ms: u64) -> Result<Project, StoreError> {
        self.retry.run(|| {
            let mut inner = self.inner.lock();
            if inner.projects.contains_key(&id) {
                return Err(StoreError::Conflict(format!("project already exists: {id}")));
            }
            let project = Project { id: id.clone(), name: name.clone(), created_at_ms: now_ms, updated_at_ms: now_ms };
            inner.projects.insert(id.clone(), project.clone());
            inner.states.entry(id.clone()).or_default();
            Ok(project)
        })
    }

    pub fn list_projects(&self) -> Vec<Project> {
        let inner = self.inner.lock();
        let mut projects: Vec<Project> = inner.projects.values().cloned().collect();
        projects.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        projects
    }

    // ---- items ----------------------------------------------------------

    pub fn insert_item(&self, project: &ProjectId, item: Item) {
        self.with_state_mut(project, |state| state.items.insert(item));
    }

    pub fn get_item(&self, project: &ProjectId, id: &ItemId) -> Result<Item, StoreError> {
        self.with_state(project, |state| {
            state.items.get(id).cloned().ok_or_else(|| StoreError::ItemNotFound(*id))
        })
    }

    pub fn list_items(&self, project: &ProjectId) -> Vec<Item> {
        self.with_state(project, |state| Ok(state.items.list_active().into_iter().cloned().collect()))
            .unwrap_or_default()
    }

    pub fn count_active_in_stage(&self, project: &ProjectId, stage: Stage) -> u32 {
        self.with_state(project, |state| Ok(state.items.count_active_in_stage(stage))).unwrap_or(0)
    }

    pub fn update_item(
        &self,
        project: &ProjectId,
        id: &ItemId,
        mutate: impl FnOnce(&mut Item),
    ) -> Result<Item, StoreError> {
        self.with_state_mut_result(project, |state| {
            let item = state.items.get_mut(id).ok_or(StoreError::ItemNotFound(*id))?;
            mutate(item);
            Ok(item.clone())
        })
    }

    // ---- dependencies (§3 invariants 3, 4) ------------------------------

    /// Add a dependency edge; both ids are looked up *within this project*,
    /// so an id belonging to a different project simply isn't found.
    pub fn add_dependency(&self, project: &ProjectId, item: ItemId, depends_on: ItemId) -> Result<(), StoreError> {
        self.with_state_mut_result(project, |state| {
            if !state.items.contains(&item) {
                return Err(StoreError::ItemNotFound(item));
            }
            if !state.items.contains(&depends_on) {
                return Err(StoreError::Validation {
                    field: "dependsOnId",
                    reason: "must reference an item in the same project".into(),
                });
            }
            state.dependencies.insert(item, depends_on);
            Ok(())
        })
    }

    pub fn dependencies_of(&self, project: &ProjectId, item: ItemId) -> Vec<ItemId> {
        self.with_state(project, |state| Ok(state.dependencies.dependencies_of(item).collect()))
            .unwrap_or_default()
    }

    pub fn all_edges(&self, project: &ProjectId) -> Vec<(ItemId, ItemId)> {
        self.with_state(project, |state| Ok(state.dependencies.all_edges().copied().collect()))
            .unwrap_or_default()
    }

    // ---- claims (§3 invariant 5, §4.2) ----------------------------------

    pub fn claim_on_item(&self, project: &ProjectId, item: &ItemId) -> Option<AgentClaim> {
        self.with_state(project, |state| Ok(state.claims.claim_on_item(item).cloned())).ok().flatten()
    }

    pub fn item_claimed_by_agent(&self, project: &ProjectId, agent: &str) -> Option<ItemId> {
        self.with_state(project, |state| Ok(state.claims.item_claimed_by(agent).copied()))
            .ok()
            .flatten()
    }

    /// Atomically check both claim indexes and insert (§3 invariant 5, §4.2).
    /// Returns the existing claim unchanged if `agent` already holds it
    /// (idempotent reclaim); `ClaimConflict` if a different agent holds
    /// `item_id`; `AgentBusy` if `agent` already holds a claim on another
    /// item anywhere in the store. Checked and inserted under one lock
    /// acquisition so two concurrent claimants can never both win.
    pub fn try_claim(
        &self,
        project: &ProjectId,
        item_id: ItemId,
        agent: &str,
        now_ms: u64,
    ) -> Result<AgentClaim, StoreError> {
        let mut inner = self.inner.lock();

        if let Some(existing) = inner.states.get(project).and_then(|s| s.claims.claim_on_item(&item_id)) {
            return if existing.agent == agent {
                Ok(existing.clone())
            } else {
                Err(StoreError::ClaimConflict { claimed_by: existing.agent.clone() })
            };
        }

        for state in inner.states.values() {
            if let Some(claimed_item) = state.claims.item_claimed_by(agent) {
                if *claimed_item != item_id {
                    return Err(StoreError::AgentBusy { agent: agent.to_string(), item: *claimed_item });
                }
            }
        }

        let state = inner.states.entry(project.clone()).or_default();
        if !state.items.contains(&item_id) {
            return Err(StoreError::ItemNotFound(item_id));
        }

        let claim = AgentClaim { project_id: project.clone(), item_id, agent: agent.to_string(), claimed_at_ms: now_ms };
        state.claims.insert(claim.clone());
        if let Some(item) = state.items.get_mut(&item_id) {
            item.assigned_agent = Some(agent.to_string());
        }
        Ok(claim)
    }

    /// Idempotent: returns `None` if the item had no claim (§4.2 release algorithm).
    pub fn release_claim(&self, project: &ProjectId, item: &ItemId) -> Option<AgentClaim> {
        self.with_state_mut(project, |state| state.claims.release_item(item))
    }

    // ---- missions (§3, §4.3) ---------------------------------------------

    pub fn insert_mission(&self, project: &ProjectId, mission: Mission) {
        self.with_state_mut(project, |state| state.missions.insert(mission));
    }

    pub fn get_mission(&self, project: &ProjectId, id: &MissionId) -> Result<Mission, StoreError> {
        self.with_state(project, |state| {
            state.missions.get(id).cloned().ok_or(StoreError::MissionNotFound(*id))
        })
    }

    pub fn current_mission(&self, project: &ProjectId) -> Option<Mission> {
        self.with_state(project, |state| Ok(state.missions.current().cloned())).ok().flatten()
    }

    pub fn list_missions(&self, project: &ProjectId) -> Vec<Mission> {
        self.with_state(project, |state| Ok(state.missions.list().into_iter().cloned().collect()))
            .unwrap_or_default()
    }

    pub fn update_mission(
        &self,
        project: &ProjectId,
        id: &MissionId,
        mutate: impl FnOnce(&mut Mission),
    ) -> Result<Mission, StoreError> {
        self.with_state_mut_result(project, |state| {
            let mission = state.missions.get_mut(id).ok_or(StoreError::MissionNotFound(*id))?;
            mutate(mission);
            Ok(mission.clone())
        })
    }

    pub fn link_mission_item(&self, project: &ProjectId, mission_id: MissionId, item_id: ItemId) {
        self.with_state_mut(project, |state| state.missions.link_item(mission_id, item_id));
    }

    pub fn items_of_mission(&self, project: &ProjectId, mission_id: &MissionId) -> Vec<ItemId> {
        self.with_state(project, |state| Ok(state.missions.items_of(mission_id).collect()))
            .unwrap_or_default()
    }

    pub fn archive_mission_links(&self, project: &ProjectId, mission_id: &MissionId, at_ms: u64) -> Vec<ItemId> {
        self.with_state_mut(project, |state| state.missions.archive_links(mission_id, at_ms))
    }

    // ---- work log, activity, hooks --------------------------------------

    pub fn append_work_log(&self, project: &ProjectId, entry: WorkLogEntry) {
        self.with_state_mut(project, |state| state.work_log.push(entry));
    }

    pub fn append_activity(&self, project: &ProjectId, entry: ActivityEntry) {
        self.with_state_mut(project, |state| state.activity.append(entry));
    }

    pub fn list_activity(&self, project: &ProjectId, mission_id: Option<&MissionId>, limit: usize) -> Vec<ActivityEntry> {
        self.with_state(project, |state| Ok(state.activity.list(mission_id, limit).into_iter().cloned().collect()))
            .unwrap_or_default()
    }

    /// Returns `true` if inserted, `false` if skipped as a dedup hit (§4.5 step 2).
    pub fn insert_hook_event(&self, project: &ProjectId, event: HookEvent) -> bool {
        self.with_state_mut(project, |state| state.hooks.insert(event))
    }

    pub fn list_hook_events(&self, project: &ProjectId) -> Vec<HookEvent> {
        self.with_state(project, |state| Ok(state.hooks.list().to_vec())).unwrap_or_default()
    }

    pub fn prune_hook_events(&self, project: &ProjectId, older_than_ms: u64) -> usize {
        self.with_state_mut(project, |state| {
            let keep_mission = state.missions.current().map(|m| m.id);
            state.hooks.prune(older_than_ms, keep_mission.as_ref())
        })
    }

    // ---- stage WIP limits (§3: process-global, not per-project) ---------

    pub fn wip_limit(&self, stage: Stage) -> WipLimit {
        self.inner.lock().wip_limits.get(&stage).copied().unwrap_or(WipLimit::UNLIMITED)
    }

    pub fn set_wip_limit(&self, stage: Stage, limit: WipLimit) {
        self.inner.lock().wip_limits.insert(stage, limit);
    }

    /// Agent with an active claim anywhere in the project; used by the claim
    /// manager's cross-project `AGENT_BUSY` check (§4.2 step 3) when the
    /// caller already knows the project to search.
    pub fn agent_claim_anywhere(&self, project: &ProjectId, agent: &str) -> Option<ItemId> {
        self.item_claimed_by_agent(project, agent)
    }

    // ---- internal helpers -------------------------------------------------

    // These don't route through `self.retry`: a `parking_lot::Mutex` never
    // poisons and none of the closures below construct `StoreError::Transient`,
    // so there is nothing here retryable in-process. The retry layer exists
    // for `ensure_project`/`create_project`, which own their retry loop body
    // directly (a `FnOnce` payload can't be re-invoked by a retrying `FnMut`).

    fn with_state<T>(&self, project: &ProjectId, f: impl FnOnce(&ProjectState) -> Result<T, StoreError>) -> Result<T, StoreError> {
        let inner = self.inner.lock();
        let state = inner.states.get(project).ok_or_else(|| StoreError::ProjectNotFound(project.clone()))?;
        f(state)
    }

    fn with_state_mut<T>(&self, project: &ProjectId, f: impl FnOnce(&mut ProjectState) -> T) -> T {
        let mut inner = self.inner.lock();
        let state = inner.states.entry(project.clone()).or_default();
        f(state)
    }

    fn with_state_mut_result<T>(
        &self,
        project: &ProjectId,
        f: impl FnOnce(&mut ProjectState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut inner = self.inner.lock();
        let state = inner.states.entry(project.clone()).or_default();
        f(state)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}
