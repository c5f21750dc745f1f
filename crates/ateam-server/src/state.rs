// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared axum handler state.

use ateam_core::SystemClock;
use ateam_engine::Engine;

/// Cheap to clone: [`Engine`] already shares its store and broker through
/// internal `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub engine: Engine<SystemClock>,
}

impl AppState {
    pub fn new(engine: Engine<SystemClock>) -> Self {
        Self { engine }
    }
}
