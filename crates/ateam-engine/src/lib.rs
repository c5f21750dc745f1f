// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ateam-engine: the board engine, claim manager, mission state machine,
//! hook-event ingestor, and activity log (§4.1-4.3, §4.5, §4.7) — the
//! business rules layered on top of `ateam-storage`'s structural guarantees.

mod activity;
mod board;
mod claims;
mod errors;
mod graph;
mod hooks;
mod missions;

use std::sync::Arc;

use ateam_broker::EventBroker;
use ateam_core::{Clock, SystemClock};
use ateam_storage::Store;

pub use board::BoardSnapshot;
pub use claims::StopOutcome;
pub use errors::EngineError;
pub use graph::Readiness;
pub use hooks::IngestOutcome;
pub use missions::{ArchiveOutcome, MarkerAction};

/// The orchestration kernel: board, claims, missions, hooks, and activity,
/// all sharing one store and one event broker.
///
/// Generic over [`Clock`] so tests can drive it with a [`ateam_core::FakeClock`];
/// production code uses the default [`SystemClock`].
#[derive(Clone)]
pub struct Engine<C: Clock = SystemClock> {
    store: Arc<Store>,
    broker: EventBroker,
    clock: C,
}

impl<C: Clock> Engine<C> {
    pub fn new(store: Arc<Store>, broker: EventBroker, clock: C) -> Self {
        Self { store, broker, clock }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn broker(&self) -> &EventBroker {
        &self.broker
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.epoch_ms()
    }
}

#[cfg(any(test, feature = "test-support"))]
pub fn test_engine() -> Engine<ateam_core::FakeClock> {
    use std::time::Duration;
    Engine::new(
        Arc::new(Store::default()),
        EventBroker::new(256, Duration::from_secs(30)),
        ateam_core::FakeClock::new(),
    )
}
