// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_engine;
use ateam_core::test_support::test_project_id;

#[test]
fn log_defaults_to_info_and_timestamps() {
    let engine = test_engine();
    let project = test_project_id();
    let entry = engine.log(&project, None, Some("Murdock".into()), "started".into(), None);
    assert_eq!(entry.level, ActivityLevel::Info);
    assert_eq!(entry.mission_id, None);
}

#[test]
fn log_auto_associates_with_the_current_mission() {
    let engine = test_engine();
    let project = test_project_id();
    let (mission, _) = engine.create_mission(&project, "M".into(), "PRD.md".into(), false).unwrap();

    let entry = engine.log(&project, None, None, "precheck running".into(), None);
    assert_eq!(entry.mission_id, Some(mission.id));
}

#[test]
fn list_activity_is_newest_first_and_respects_limit() {
    let engine = test_engine();
    let project = test_project_id();
    for i in 0..5 {
        engine.log(&project, None, None, format!("entry {i}"), None);
    }

    let entries = engine.list_activity(&project, None, 2);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message, "entry 4");
    assert_eq!(entries[1].message, "entry 3");
}

#[test]
fn list_activity_scopes_to_current_mission_by_default() {
    let engine = test_engine();
    let project = test_project_id();
    engine.log(&project, None, None, "before any mission".into(), None);

    let (mission, _) = engine.create_mission(&project, "M".into(), "PRD.md".into(), false).unwrap();
    engine.log(&project, None, None, "during mission".into(), None);

    let entries = engine.list_activity(&project, None, 10);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mission_id, Some(mission.id));
}
