// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ateam-server: the HTTP boundary (§6) — env config, error-to-status
//! mapping, the project scope guard, mission-marker I/O, and route handlers
//! wired on top of `ateam-engine`.

pub mod env;
pub mod error;
pub mod marker;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;

pub use state::AppState;

/// Assemble the full router. Every route except `GET|POST /api/projects`
/// and `GET /api/board/events` runs behind the project scope guard (§4.6).
pub fn build_router(state: AppState) -> Router {
    let scoped = Router::new()
        .merge(routes::board::router())
        .merge(routes::items::router())
        .merge(routes::agents::router())
        .merge(routes::missions::router())
        .merge(routes::activity::router())
        .merge(routes::hooks::router())
        .merge(routes::stages::router())
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), middleware::require_project_scope));

    Router::new()
        .merge(routes::projects::router())
        .merge(routes::events::router())
        .merge(scoped)
        .with_state(state)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
