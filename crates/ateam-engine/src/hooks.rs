// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hook-event ingestor: dedup-on-correlation batch intake (§4.5).

use ateam_core::{BoardEvent, Clock, HookEvent, HookEventType, HookEventWithDuration, ProjectId};

use crate::errors::EngineError;
use crate::Engine;

/// Batch intake result (§4.5 step 3-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestOutcome {
    pub created: usize,
    pub skipped: usize,
}

impl<C: Clock> Engine<C> {
    /// Reject the whole batch on any invalid event type; otherwise insert
    /// each event, skipping dedup hits, and publish once for the batch.
    pub fn ingest_hook_events(&self, project: &ProjectId, events: Vec<HookEvent>) -> Result<IngestOutcome, EngineError> {
        for event in &events {
            validate_event_type(event.event_type)?;
        }

        let mut inserted = Vec::with_capacity(events.len());
        let mut outcome = IngestOutcome::default();
        for event in events {
            if self.store().insert_hook_event(project, event.clone()) {
                outcome.created += 1;
                inserted.push(event);
            } else {
                outcome.skipped += 1;
            }
        }

        if !inserted.is_empty() {
            self.broker().publish(project, BoardEvent::HookEventRecorded { events: inserted });
        }
        Ok(outcome)
    }

    pub fn prune_hook_events(&self, project: &ProjectId, older_than_ms: u64) -> usize {
        self.store().prune_hook_events(project, older_than_ms)
    }

    /// Read-side join of `post_tool_use`(-failure) events with their
    /// `pre_tool_use` counterpart by correlation id (§4.5 duration pairing).
    pub fn hook_events_with_duration(&self, project: &ProjectId) -> Vec<HookEventWithDuration> {
        let events = self.store().list_hook_events(project);
        events
            .iter()
            .map(|event| {
                let duration_ms = if event.event_type.is_post_tool_use() {
                    event.correlation_id.as_deref().and_then(|correlation_id| {
                        events
                            .iter()
                            .find(|candidate| {
                                candidate.event_type == HookEventType::PreToolUse
                                    && candidate.correlation_id.as_deref() == Some(correlation_id)
                            })
                            .map(|pre| event.timestamp_ms.saturating_sub(pre.timestamp_ms))
                    })
                } else {
                    None
                };
                HookEventWithDuration { event: event.clone(), duration_ms }
            })
            .collect()
    }
}

fn validate_event_type(_event_type: HookEventType) -> Result<(), EngineError> {
    // `HookEventType` is already a closed enum (§4.5 step 1); an
    // unparsable wire value is rejected earlier, at deserialization, so
    // there is nothing left to validate once we have a typed value. Kept
    // as an explicit step so the batch-rejection contract stays visible
    // at the call site it documents.
    Ok(())
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
