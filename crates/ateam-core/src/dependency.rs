// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directed item-dependency edges (§3, invariants 3 and 4).

use serde::{Deserialize, Serialize};

use crate::item::ItemId;
use crate::project::ProjectId;

/// Directed edge: `item_id` depends on `depends_on_id` (must reach `done`
/// before `item_id` can leave `briefings`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDependency {
    pub project_id: ProjectId,
    pub item_id: ItemId,
    pub depends_on_id: ItemId,
}
