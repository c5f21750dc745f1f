// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the server crate (§4.9).

use std::path::PathBuf;
use std::time::Duration;

/// HTTP bind address (`ATEAM_BIND_ADDR`, default `127.0.0.1:4170`).
pub fn bind_addr() -> String {
    std::env::var("ATEAM_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:4170".to_string())
}

/// `tracing-subscriber` `EnvFilter` directive (`ATEAM_LOG`, default `info`).
pub fn log_filter() -> String {
    std::env::var("ATEAM_LOG").unwrap_or_else(|_| "info".to_string())
}

/// Per-subscriber bounded event queue capacity (`ATEAM_EVENT_QUEUE_CAPACITY`, default 256).
pub fn event_queue_capacity() -> usize {
    std::env::var("ATEAM_EVENT_QUEUE_CAPACITY").ok().and_then(|s| s.parse().ok()).unwrap_or(256)
}

/// Idle heartbeat cadence (`ATEAM_HEARTBEAT_MS`, default 30s).
pub fn heartbeat_interval() -> Duration {
    std::env::var("ATEAM_HEARTBEAT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(30))
}

/// Resolve marker directory: `ATEAM_MARKER_DIR` > `XDG_STATE_HOME/ateam` > `~/.local/state/ateam`.
pub fn marker_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ATEAM_MARKER_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("ateam"));
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".local/state/ateam"))
}

/// Store retry attempt count (`ATEAM_DB_MAX_RETRIES`, default 3).
pub fn db_max_retries() -> u32 {
    std::env::var("ATEAM_DB_MAX_RETRIES").ok().and_then(|s| s.parse().ok()).unwrap_or(3)
}

/// Store retry exponential backoff base (`ATEAM_DB_RETRY_BASE_MS`, default 20ms).
pub fn db_retry_base() -> Duration {
    std::env::var("ATEAM_DB_RETRY_BASE_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_millis(20))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
