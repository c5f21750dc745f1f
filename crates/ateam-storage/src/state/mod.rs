// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-project materialized state: every collection named in §6.5, scoped
//! to a single project so cross-project queries are structurally impossible.

mod activity;
mod claims;
mod dependencies;
mod hooks;
mod items;
mod missions;

pub use activity::ActivityState;
pub use claims::ClaimState;
pub use dependencies::DependencyState;
pub use hooks::HookState;
pub use items::ItemState;
pub use missions::MissionState as MissionStoreState;

use ateam_core::WorkLogEntry;

/// All state belonging to one project.
#[derive(Debug, Default)]
pub struct ProjectState {
    pub items: ItemState,
    pub dependencies: DependencyState,
    pub claims: ClaimState,
    pub missions: MissionStoreState,
    pub activity: ActivityState,
    pub hooks: HookState,
    pub work_log: Vec<WorkLogEntry>,
}
