// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine-level error taxonomy (§4.10), converging on [`DomainError`].

use ateam_core::{DomainError, ErrorCode, ItemId, MissionId};
use ateam_storage::StoreError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("mission not found: {0}")]
    MissionNotFound(MissionId),

    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: &'static str, to: &'static str, allowed: Vec<&'static str> },

    #[error("wip limit exceeded for stage {stage}")]
    WipLimitExceeded { stage: &'static str, limit: u32, current: u32 },

    #[error("dependency cycle")]
    DependencyCycle { cycle: Vec<String> },

    #[error("output collision on {path}")]
    OutputCollision { path: String, items: Vec<String> },

    #[error("item {item} is not ready to leave briefings: {unmet} unmet dependencies")]
    NotReady { item: ItemId, unmet: u32 },

    #[error("item {item} already claimed by {claimed_by}")]
    ClaimConflict { item: ItemId, claimed_by: String },

    #[error("claim mismatch on {item}: held by {claimed_by}")]
    ClaimMismatch { item: ItemId, claimed_by: String },

    #[error("item {0} is not claimed")]
    NotClaimed(ItemId),

    #[error("agent {agent} already busy with {item}")]
    AgentBusy { agent: String, item: ItemId },

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<EngineError> for DomainError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ItemNotFound(id) => {
                DomainError::new(ErrorCode::ItemNotFound, format!("item not found: {id}"))
            }
            EngineError::MissionNotFound(id) => {
                DomainError::new(ErrorCode::NotFound, format!("mission not found: {id}"))
            }
            EngineError::InvalidTransition { from, to, allowed } => {
                DomainError::new(ErrorCode::InvalidTransition, format!("cannot move {from} -> {to}"))
                    .with_details(json!({ "from": from, "to": to, "allowed": allowed }))
            }
            EngineError::WipLimitExceeded { stage, limit, current } => {
                DomainError::new(ErrorCode::WipLimitExceeded, format!("stage {stage} is at its WIP limit"))
                    .with_details(json!({ "stage": stage, "limit": limit, "current": current }))
            }
            EngineError::DependencyCycle { cycle } => {
                DomainError::new(ErrorCode::DependencyCycle, "dependency graph would contain a cycle")
                    .with_details(json!({ "cycle": cycle }))
            }
            EngineError::OutputCollision { path, items } => {
                DomainError::new(ErrorCode::OutputCollision, format!("output path {path} is already claimed"))
                    .with_details(json!({ "path": path, "items": items }))
            }
            EngineError::NotReady { item, unmet } => {
                DomainError::new(ErrorCode::NotReady, format!("item {item} has unmet dependencies"))
                    .with_details(json!({ "itemId": item, "unmet": unmet }))
            }
            EngineError::ClaimConflict { item, claimed_by } => {
                DomainError::new(ErrorCode::ClaimConflict, format!("item {item} is already claimed"))
                    .with_details(json!({ "claimedBy": claimed_by }))
            }
            EngineError::ClaimMismatch { item, claimed_by } => {
                DomainError::new(ErrorCode::ClaimMismatch, format!("item {item} is claimed by someone else"))
                    .with_details(json!({ "claimedBy": claimed_by }))
            }
            EngineError::NotClaimed(id) => {
                DomainError::new(ErrorCode::NotClaimed, format!("item {id} has no active claim"))
            }
            EngineError::AgentBusy { agent, item } => {
                DomainError::new(ErrorCode::AgentBusy, format!("agent {agent} already holds a claim"))
                    .with_details(json!({ "itemId": item }))
            }
            EngineError::Validation(message) => DomainError::new(ErrorCode::ValidationError, message),
            // The store already carries its own structural errors into the
            // same wire taxonomy (unique-index violations, missing rows);
            // the engine only adds business-rule variants on top.
            EngineError::Store(store_err) => store_err.into(),
        }
    }
}
