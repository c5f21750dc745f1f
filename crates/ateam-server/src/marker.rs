// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mission-active marker file I/O (§6.4). The engine only says *whether* to
//! write or clear; touching the filesystem lives here, at the HTTP boundary,
//! and never fails the calling operation.

use ateam_core::ProjectId;
use ateam_engine::MarkerAction;

use crate::env;

/// Apply a [`MarkerAction`] for `project`. Best-effort: I/O failures are
/// logged and swallowed, never propagated to the caller.
pub fn apply(action: MarkerAction, project: &ProjectId) {
    let Some(dir) = env::marker_dir() else {
        tracing::warn!(project = %project, "no marker directory resolved, skipping marker write");
        return;
    };
    apply_in(&dir, action, project)
}

fn apply_in(dir: &std::path::Path, action: MarkerAction, project: &ProjectId) {
    let path = dir.join(format!("{project}.marker"));

    match action {
        MarkerAction::Write => {
            if let Some(parent) = path.parent() {
                if let Err(err) = std::fs::create_dir_all(parent) {
                    tracing::warn!(project = %project, error = %err, "failed to create marker directory");
                    return;
                }
            }
            let now_ms = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default();
            let contents = format!("{project} {now_ms}\n");
            if let Err(err) = std::fs::write(&path, contents) {
                tracing::warn!(project = %project, error = %err, "failed to write mission-active marker");
            } else {
                tracing::info!(project = %project, path = %path.display(), "wrote mission-active marker");
            }
        }
        MarkerAction::Clear => match std::fs::remove_file(&path) {
            Ok(()) => tracing::info!(project = %project, "cleared mission-active marker"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(project = %project, error = %err, "failed to clear mission-active marker"),
        },
    }
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
