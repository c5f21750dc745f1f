// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn outputs_paths_skips_none() {
    let outputs = Outputs { test: Some("a.rs".into()), r#impl: None, types: Some("t.rs".into()) };
    let paths: Vec<&str> = outputs.paths().collect();
    assert_eq!(paths, vec!["a.rs", "t.rs"]);
}

#[test]
fn item_builder_defaults_to_briefings_unclaimed() {
    let item = Item::builder().build();
    assert_eq!(item.stage, Stage::Briefings);
    assert!(item.assigned_agent.is_none());
    assert_eq!(item.rejection_count, 0);
    assert!(!item.is_archived());
}

#[test]
fn item_builder_overrides_fields() {
    let item = Item::builder().title("Ship it").priority(Priority::Critical).stage(Stage::Review).build();
    assert_eq!(item.title, "Ship it");
    assert_eq!(item.priority, Priority::Critical);
    assert_eq!(item.stage, Stage::Review);
}

#[test]
fn priority_ordering_is_monotonic() {
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
    assert!(Priority::High < Priority::Critical);
}
