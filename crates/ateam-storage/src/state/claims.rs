// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exclusive agent-to-item custody (§3 invariant 5, §6.5: two composite
//! unique indexes, one on agent, one on item).

use std::collections::HashMap;

use ateam_core::{AgentClaim, AgentName, ItemId};

#[derive(Debug, Default)]
pub struct ClaimState {
    by_item: HashMap<ItemId, AgentClaim>,
    by_agent: HashMap<AgentName, ItemId>,
}

impl ClaimState {
    pub fn claim_on_item(&self, item: &ItemId) -> Option<&AgentClaim> {
        self.by_item.get(item)
    }

    pub fn item_claimed_by(&self, agent: &str) -> Option<&ItemId> {
        self.by_agent.get(agent)
    }

    /// Insert unconditionally. Callers (the claim manager) must have already
    /// verified both uniqueness constraints; this only maintains the indexes.
    pub fn insert(&mut self, claim: AgentClaim) {
        self.by_agent.insert(claim.agent.clone(), claim.item_id);
        self.by_item.insert(claim.item_id, claim);
    }

    /// Remove any claim on `item`. Idempotent: no-op if unclaimed (§4.2 release algorithm).
    pub fn release_item(&mut self, item: &ItemId) -> Option<AgentClaim> {
        let claim = self.by_item.remove(item)?;
        self.by_agent.remove(&claim.agent);
        Some(claim)
    }
}
