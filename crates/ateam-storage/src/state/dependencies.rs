// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency edges within a single project (§3 invariants 3, 4).

use std::collections::HashSet;

use ateam_core::ItemId;

#[derive(Debug, Default)]
pub struct DependencyState {
    /// (item, depends_on) edges, unique per §6.5.
    edges: HashSet<(ItemId, ItemId)>,
}

impl DependencyState {
    pub fn contains(&self, item: ItemId, depends_on: ItemId) -> bool {
        self.edges.contains(&(item, depends_on))
    }

    pub fn insert(&mut self, item: ItemId, depends_on: ItemId) -> bool {
        self.edges.insert((item, depends_on))
    }

    pub fn dependencies_of(&self, item: ItemId) -> impl Iterator<Item = ItemId> + '_ {
        self.edges.iter().filter(move |(a, _)| *a == item).map(|(_, b)| *b)
    }

    pub fn dependents_of(&self, item: ItemId) -> impl Iterator<Item = ItemId> + '_ {
        self.edges.iter().filter(move |(_, b)| *b == item).map(|(a, _)| *a)
    }

    pub fn all_edges(&self) -> impl Iterator<Item = &(ItemId, ItemId)> {
        self.edges.iter()
    }
}
