// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for tests across the workspace. Gated behind
//! `test-support` so downstream crates can depend on it without pulling
//! it into release builds.

use crate::project::ProjectId;

/// A valid, deterministic project id for fixtures that don't care about
/// the exact value.
pub fn test_project_id() -> ProjectId {
    ProjectId::normalize("test-project").expect("valid test id")
}

/// A second project id, distinct from [`test_project_id`], for
/// cross-project isolation tests (invariant 1).
pub fn other_project_id() -> ProjectId {
    ProjectId::normalize("other-project").expect("valid test id")
}
