// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire-level error taxonomy shared by every crate in the workspace.
//!
//! Each crate defines its own `thiserror` enum at its natural seam and
//! converts into [`ErrorCode`] + structured `details` at the boundary; the
//! HTTP layer is the only place that turns this into a status code.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable wire error codes (§6.2). Unknown codes map to `API_ERROR` client-side;
/// that mapping lives in clients, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    ItemNotFound,
    InvalidTransition,
    InvalidStage,
    WipLimitExceeded,
    DependencyCycle,
    OutputCollision,
    NotReady,
    ClaimConflict,
    ClaimMismatch,
    NotClaimed,
    AgentBusy,
    Conflict,
    Unauthorized,
    NotFound,
    DatabaseError,
    ServerError,
}

crate::simple_display! {
    ErrorCode {
        ValidationError => "VALIDATION_ERROR",
        ItemNotFound => "ITEM_NOT_FOUND",
        InvalidTransition => "INVALID_TRANSITION",
        InvalidStage => "INVALID_STAGE",
        WipLimitExceeded => "WIP_LIMIT_EXCEEDED",
        DependencyCycle => "DEPENDENCY_CYCLE",
        OutputCollision => "OUTPUT_COLLISION",
        NotReady => "NOT_READY",
        ClaimConflict => "CLAIM_CONFLICT",
        ClaimMismatch => "CLAIM_MISMATCH",
        NotClaimed => "NOT_CLAIMED",
        AgentBusy => "AGENT_BUSY",
        Conflict => "CONFLICT",
        Unauthorized => "UNAUTHORIZED",
        NotFound => "NOT_FOUND",
        DatabaseError => "DATABASE_ERROR",
        ServerError => "SERVER_ERROR",
    }
}

/// A domain error carrying a stable code, a human message, and optional
/// structured details (`{from, to, allowed[]}`, `{stage, limit, current}`,
/// `{claimedBy}`, a cycle path, …) for client-side recovery affordances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), details: None }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for DomainError {}
