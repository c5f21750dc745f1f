// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent claims: exclusive custody of a single item by a single named agent.

use serde::{Deserialize, Serialize};

use crate::item::ItemId;
use crate::project::ProjectId;

/// A named actor (Hannibal, Face, Murdock, B.A., Lynch, Amy, Tawnia, …).
///
/// Agent names are operator-supplied, not a closed enum: new crew members
/// can be added without a schema change.
pub type AgentName = String;

/// Exclusive custody record. Invariant 5: at most one row per agent, at
/// most one row per item, enforced by two composite unique indexes in
/// the store (§6.5), not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentClaim {
    pub project_id: ProjectId,
    pub item_id: ItemId,
    pub agent: AgentName,
    pub claimed_at_ms: u64,
}
