// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ateam_core::ItemId;

#[test]
fn move_item_request_parses_camel_case() {
    let id = ItemId::new();
    let body = format!(r#"{{"itemId": "{id}", "toStage": "ready", "force": true}}"#);
    let req: MoveItemRequest = serde_json::from_str(&body).unwrap();
    assert_eq!(req.item_id, id);
    assert_eq!(req.to_stage, Stage::Ready);
    assert!(req.force);
    assert_eq!(req.acting_agent, None);
}

#[test]
fn move_item_request_defaults_force_and_acting_agent() {
    let id = ItemId::new();
    let body = format!(r#"{{"itemId": "{id}", "toStage": "ready"}}"#);
    let req: MoveItemRequest = serde_json::from_str(&body).unwrap();
    assert!(!req.force);
}

#[test]
fn stage_patch_accepts_null_as_unlimited() {
    let req: StagePatchRequest = serde_json::from_str(r#"{"wipLimit": null}"#).unwrap();
    assert_eq!(req.wip_limit, None);
}
