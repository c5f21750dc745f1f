// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency-graph utilities: cycle detection and readiness (§4.1, §9).

use std::collections::{HashMap, HashSet};

use ateam_core::{Item, ItemId, Stage};

/// Would adding edge `item -> depends_on` to `edges` close a cycle? If so,
/// return the cycle path (dependent-first, closing back on itself).
pub fn find_cycle_with_candidate(
    edges: &[(ItemId, ItemId)],
    item: ItemId,
    depends_on: ItemId,
) -> Option<Vec<ItemId>> {
    let mut adjacency: HashMap<ItemId, Vec<ItemId>> = HashMap::new();
    for (from, to) in edges {
        adjacency.entry(*from).or_default().push(*to);
    }
    adjacency.entry(item).or_default().push(depends_on);

    let mut visiting = HashSet::new();
    let mut path = Vec::new();
    dfs(item, &adjacency, &mut visiting, &mut path)
}

fn dfs(
    node: ItemId,
    adjacency: &HashMap<ItemId, Vec<ItemId>>,
    visiting: &mut HashSet<ItemId>,
    path: &mut Vec<ItemId>,
) -> Option<Vec<ItemId>> {
    if let Some(pos) = path.iter().position(|&n| n == node) {
        let mut cycle = path[pos..].to_vec();
        cycle.push(node);
        return Some(cycle);
    }
    if !visiting.insert(node) {
        return None;
    }
    path.push(node);
    if let Some(neighbors) = adjacency.get(&node) {
        for &next in neighbors {
            if let Some(cycle) = dfs(next, adjacency, visiting, path) {
                return Some(cycle);
            }
        }
    }
    path.pop();
    None
}

/// Readiness summary (§4.1): items sitting in `briefings` with every
/// dependency done, and the unmet-dependency count for everything else.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Readiness {
    pub ready: Vec<ItemId>,
    pub blocked: HashMap<ItemId, u32>,
}

/// Compute readiness for every non-archived item in a project.
///
/// `dependencies_of(item)` must return `item`'s direct prerequisites;
/// `stage_of(item)` must return the current stage of an already-validated id.
pub fn compute_readiness(
    items: &[Item],
    dependencies_of: impl Fn(ItemId) -> Vec<ItemId>,
) -> Readiness {
    let stages: HashMap<ItemId, Stage> = items.iter().map(|i| (i.id, i.stage)).collect();
    let mut readiness = Readiness::default();

    for item in items {
        if item.stage != Stage::Briefings {
            continue;
        }
        let deps = dependencies_of(item.id);
        let unmet = deps
            .iter()
            .filter(|d| stages.get(d).copied() != Some(Stage::Done))
            .count() as u32;
        if unmet == 0 {
            readiness.ready.push(item.id);
        } else {
            readiness.blocked.insert(item.id, unmet);
        }
    }
    readiness
}

/// Is `item` ready to leave `briefings`? All direct dependencies done.
pub fn is_ready(dependencies: &[ItemId], stage_of: impl Fn(ItemId) -> Option<Stage>) -> bool {
    dependencies.iter().all(|d| stage_of(*d) == Some(Stage::Done))
}

/// Find a non-null output path shared by two distinct items with no direct
/// dependency relation between them (§4.1 output collision).
pub fn find_output_collision(
    candidate: &Item,
    others: &[Item],
    is_related: impl Fn(ItemId, ItemId) -> bool,
) -> Option<(String, ItemId)> {
    for other in others {
        if other.id == candidate.id {
            continue;
        }
        if is_related(candidate.id, other.id) || is_related(other.id, candidate.id) {
            continue;
        }
        for path in candidate.outputs.paths() {
            if other.outputs.paths().any(|p| p == path) {
                return Some((path.to_string(), other.id));
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
