// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod project_scope;

pub use project_scope::{require_project_scope, ProjectScope};
