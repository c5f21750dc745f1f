// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project identifiers and the project entity.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, ErrorCode};

const MAX_PROJECT_ID_LEN: usize = 100;

static PROJECT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("static regex"));

/// URL-safe, lowercase-normalized project identifier.
///
/// Not a [`crate::define_id!`] type: project ids are client-supplied slugs,
/// not server-generated random ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Validate and lowercase-normalize a raw identifier (§4.6 project scope guard).
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::new(ErrorCode::ValidationError, "project id must not be empty"));
        }
        if raw.len() > MAX_PROJECT_ID_LEN {
            return Err(DomainError::new(
                ErrorCode::ValidationError,
                format!("project id must be at most {MAX_PROJECT_ID_LEN} characters"),
            ));
        }
        if !PROJECT_ID_RE.is_match(raw) {
            return Err(DomainError::new(
                ErrorCode::ValidationError,
                "project id must match [a-zA-Z0-9_-]+",
            ));
        }
        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for ProjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A project: the namespace every other entity is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub created_at_ms: u64,
    pub updated_at_ms: u64,
}

impl Project {
    /// Create a project using the identifier as both id and name, per the
    /// scope guard's create-on-first-use behavior.
    pub fn new_default(id: ProjectId, now_ms: u64) -> Self {
        let name = id.as_str().to_string();
        Self { id, name, created_at_ms: now_ms, updated_at_ms: now_ms }
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
