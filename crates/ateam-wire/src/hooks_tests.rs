// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn accepts_a_single_event_object() {
    let body = r#"{"eventType": "pre_tool_use", "agent": "Face", "status": "ok", "timestampMs": 10}"#;
    let req: HookEventsRequest = serde_json::from_str(body).unwrap();
    assert_eq!(req.into_events().len(), 1);
}

#[test]
fn accepts_an_array_of_events() {
    let body = r#"[
        {"eventType": "pre_tool_use", "agent": "Face", "status": "ok", "timestampMs": 10},
        {"eventType": "post_tool_use", "agent": "Face", "status": "ok", "timestampMs": 20}
    ]"#;
    let req: HookEventsRequest = serde_json::from_str(body).unwrap();
    assert_eq!(req.into_events().len(), 2);
}
