// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work items: the units that flow through the board.

use serde::{Deserialize, Serialize};

use crate::project::ProjectId;
use crate::stage::Stage;

crate::define_id! {
    /// Unique identifier for a work item.
    pub struct ItemId("itm-");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Feature,
    Bug,
    Enhancement,
    Task,
}

crate::simple_display! {
    ItemType {
        Feature => "feature",
        Bug => "bug",
        Enhancement => "enhancement",
        Task => "task",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

crate::simple_display! {
    Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

/// Output artifact paths produced by an item's work (§4.1 output collision check).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#impl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
}

impl Outputs {
    /// Non-null output paths, for collision checking.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        [self.test.as_deref(), self.r#impl.as_deref(), self.types.as_deref()]
            .into_iter()
            .flatten()
    }
}

/// A work item. Belongs to exactly one project (invariant 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub item_type: ItemType,
    pub priority: Priority,
    pub stage: Stage,
    /// Mirrors the agent of the active claim; null when unclaimed (invariant 6).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_agent: Option<String>,
    pub rejection_count: u32,
    #[serde(default)]
    pub outputs: Outputs,
    pub created_at_ms: u64,
    pub updated_at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at_ms: Option<u64>,
}

impl Item {
    pub fn is_archived(&self) -> bool {
        self.archived_at_ms.is_some()
    }
}

/// Fields accepted when creating an item (`POST /api/items`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub item_type: ItemType,
    pub priority: Priority,
    #[serde(default)]
    pub dependencies: Vec<ItemId>,
    #[serde(default)]
    pub outputs: Outputs,
}

/// Partial update (`PATCH /api/items/{id}`). `None` fields are left untouched;
/// this is why `outputs`/`description` are doubly-optional where the field
/// itself is optional in [`Item`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub item_type: Option<ItemType>,
    pub priority: Option<Priority>,
    pub outputs: Option<Outputs>,
}

crate::builder! {
    pub struct ItemBuilder => Item {
        computed { id: ItemId = ItemId::new() }
        into { project_id: ProjectId = ProjectId::normalize("test-project").expect("valid test id") }
        into { title: String = "Untitled" }
        into { description: String = "" }
        set { item_type: ItemType = ItemType::Task }
        set { priority: Priority = Priority::Medium }
        set { stage: Stage = Stage::Briefings }
        option { assigned_agent: String = None }
        set { rejection_count: u32 = 0 }
        set { outputs: Outputs = Outputs::default() }
        set { created_at_ms: u64 = 0 }
        set { updated_at_ms: u64 = 0 }
        option { completed_at_ms: u64 = None }
        option { archived_at_ms: u64 = None }
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
