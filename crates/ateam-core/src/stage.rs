// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The eight fixed pipeline stages and the transition matrix (§4.1).

use serde::{Deserialize, Serialize};

/// A fixed pipeline position. Process-global, not per-project: clients never
/// define their own stages, only per-stage WIP limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Briefings,
    Ready,
    Testing,
    Implementing,
    Probing,
    Review,
    Done,
    Blocked,
}

impl Stage {
    /// Canonical order (§3), also used as the stable iteration order for
    /// board snapshots.
    pub const ALL: [Stage; 8] = [
        Stage::Briefings,
        Stage::Ready,
        Stage::Testing,
        Stage::Implementing,
        Stage::Probing,
        Stage::Review,
        Stage::Done,
        Stage::Blocked,
    ];

    pub fn order(self) -> u8 {
        match self {
            Stage::Briefings => 0,
            Stage::Ready => 1,
            Stage::Testing => 2,
            Stage::Implementing => 3,
            Stage::Probing => 4,
            Stage::Review => 5,
            Stage::Done => 6,
            Stage::Blocked => 7,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done)
    }

    /// The stages reachable from `self` without `force=true` (§4.1).
    ///
    /// `review` is special-cased by the caller: `review -> implementing` is
    /// only reachable through the dedicated reject endpoint, not a bare move,
    /// so it is intentionally excluded here (see `allowed_moves_including_reject`).
    pub fn allowed_moves(self) -> &'static [Stage] {
        match self {
            Stage::Briefings => &[Stage::Ready],
            Stage::Ready => &[Stage::Testing],
            Stage::Testing => &[Stage::Implementing, Stage::Blocked],
            Stage::Implementing => &[Stage::Review, Stage::Blocked],
            Stage::Review => &[Stage::Probing, Stage::Blocked],
            Stage::Probing => &[Stage::Done, Stage::Blocked],
            Stage::Blocked => &[],
            Stage::Done => &[],
        }
    }

    pub fn can_move_to(self, target: Stage) -> bool {
        self.allowed_moves().contains(&target)
    }
}

crate::simple_display! {
    Stage {
        Briefings => "briefings",
        Ready => "ready",
        Testing => "testing",
        Implementing => "implementing",
        Probing => "probing",
        Review => "review",
        Done => "done",
        Blocked => "blocked",
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "briefings" => Ok(Stage::Briefings),
            "ready" => Ok(Stage::Ready),
            "testing" => Ok(Stage::Testing),
            "implementing" => Ok(Stage::Implementing),
            "probing" => Ok(Stage::Probing),
            "review" => Ok(Stage::Review),
            "done" => Ok(Stage::Done),
            "blocked" => Ok(Stage::Blocked),
            other => Err(format!("unknown stage: {other}")),
        }
    }
}

/// Per-stage WIP limit. `None` means unlimited. Stored process-global,
/// mutated only through `PATCH /api/stages/{stageId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WipLimit(pub Option<u32>);

impl WipLimit {
    pub const UNLIMITED: WipLimit = WipLimit(None);

    pub fn exceeded_by(self, count_after_move: u32) -> bool {
        match self.0 {
            Some(limit) => count_after_move > limit,
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
