// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request/query DTOs for `/api/activity` (§6.1, §4.7).

use ateam_core::{ActivityLevel, MissionId};
use serde::Deserialize;

fn default_limit() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub mission_id: Option<MissionId>,
}

impl Default for ActivityQuery {
    fn default() -> Self {
        Self { limit: default_limit(), mission_id: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogActivityRequest {
    pub message: String,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub level: Option<ActivityLevel>,
    #[serde(default)]
    pub mission_id: Option<MissionId>,
}
