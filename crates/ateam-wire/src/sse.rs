// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-stream wire format (§6.3): `data: <json>\n\n`, with a `: heartbeat\n\n`
//! comment line standing in for an event-less keepalive.

use ateam_core::BoardEvent;
use serde::Serialize;
use serde_json::{json, Value};

/// One record on `GET /api/board/events`: `{type, timestamp, data}`, where
/// `timestamp` is ISO-8601 (§6.3) rather than the epoch-ms the rest of the
/// wire format uses, to match the stream's documented envelope.
#[derive(Debug, Serialize)]
struct StreamRecord {
    #[serde(rename = "type")]
    kind: &'static str,
    timestamp: String,
    data: Value,
}

/// The `{type, timestamp, data}` JSON body of one stream record, with no
/// `data:` framing — for transports (like axum's `Sse`) that apply their
/// own framing on top.
///
/// `BoardEvent` itself serializes as `{type, data}` (its own internal tag);
/// re-wrapping the whole thing here would double the `type`/`data` keys, so
/// this lifts just the inner payload out of that shape.
pub fn to_json(event: &BoardEvent, timestamp_ms: u64) -> String {
    let inner = serde_json::to_value(event).ok().and_then(|v| v.get("data").cloned()).unwrap_or(Value::Null);
    let record = StreamRecord { kind: event.kind(), timestamp: iso8601_ms(timestamp_ms), data: inner };
    serde_json::to_string(&record).unwrap_or_else(|_| json!({"type": event.kind()}).to_string())
}

/// Render one event as a full SSE `data:` line. `timestamp_ms` is the
/// broker's publish time, converted to an ISO-8601 string for the wire.
pub fn format_event(event: &BoardEvent, timestamp_ms: u64) -> String {
    format!("data: {}\n\n", to_json(event, timestamp_ms))
}

/// The `: heartbeat\n\n` keepalive comment (§4.4, §6.3). SSE comment lines
/// start with `:` and carry no event payload.
pub fn heartbeat_line() -> &'static str {
    ": heartbeat\n\n"
}

fn iso8601_ms(epoch_ms: u64) -> String {
    chrono::DateTime::from_timestamp_millis(epoch_ms as i64)
        .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "sse_tests.rs"]
mod tests;
