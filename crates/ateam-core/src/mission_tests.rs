// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn only_archived_is_terminal() {
    assert!(MissionState::Archived.is_terminal());
    for state in [
        MissionState::Initializing,
        MissionState::Prechecking,
        MissionState::Running,
        MissionState::Postchecking,
        MissionState::Completed,
        MissionState::Failed,
    ] {
        assert!(!state.is_terminal(), "{state} should not be terminal");
    }
}

#[test]
fn display_round_trips_known_strings() {
    assert_eq!(MissionState::Running.to_string(), "running");
    assert_eq!(MissionState::Postchecking.to_string(), "postchecking");
}
