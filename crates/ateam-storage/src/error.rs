// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised by the store's structural invariants (§6.5, §7).
//!
//! Business-rule errors (WIP limits, transition matrix, cycle detection)
//! belong to `ateam-engine`; this crate only enforces what a real database's
//! constraints would: uniqueness, referential project-scoping, and dedup.

use ateam_core::{DomainError, ErrorCode, ItemId, MissionId, ProjectId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("mission not found: {0}")]
    MissionNotFound(MissionId),

    #[error("{field} violates its constraint: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("claim conflict: item already claimed by {claimed_by}")]
    ClaimConflict { claimed_by: String },

    #[error("agent busy: {agent} already holds a claim on another item")]
    AgentBusy { agent: String, item: ItemId },

    #[error("no claim held on this item")]
    NotClaimed,

    #[error("claim mismatch: held by {claimed_by}")]
    ClaimMismatch { claimed_by: String },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("transient database fault: {0}")]
    Transient(String),
}

impl StoreError {
    /// Every transient fault is retryable (§5 retry policy); everything
    /// else is a structural rejection the caller must fix.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Transient(_))
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ProjectNotFound(id) => {
                DomainError::new(ErrorCode::NotFound, format!("project not found: {id}"))
            }
            StoreError::ItemNotFound(id) => {
                DomainError::new(ErrorCode::ItemNotFound, format!("item not found: {id}"))
            }
            StoreError::MissionNotFound(id) => {
                DomainError::new(ErrorCode::NotFound, format!("mission not found: {id}"))
            }
            StoreError::Validation { field, reason } => DomainError::new(
                ErrorCode::ValidationError,
                format!("{field}: {reason}"),
            ),
            StoreError::ClaimConflict { claimed_by } => DomainError::new(
                ErrorCode::ClaimConflict,
                "item is already claimed",
            )
            .with_details(serde_json::json!({ "claimedBy": claimed_by })),
            StoreError::AgentBusy { agent, item } => DomainError::new(
                ErrorCode::AgentBusy,
                format!("{agent} already holds a claim on another item"),
            )
            .with_details(serde_json::json!({ "itemId": item })),
            StoreError::NotClaimed => {
                DomainError::new(ErrorCode::NotClaimed, "item has no active claim")
            }
            StoreError::ClaimMismatch { claimed_by } => DomainError::new(
                ErrorCode::ClaimMismatch,
                "claim is held by a different agent",
            )
            .with_details(serde_json::json!({ "claimedBy": claimed_by })),
            StoreError::Conflict(reason) => DomainError::new(ErrorCode::Conflict, reason),
            StoreError::Transient(reason) => {
                DomainError::new(ErrorCode::DatabaseError, reason)
            }
        }
    }
}
