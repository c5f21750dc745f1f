// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `GET /api/board/events` (§6.3). The one endpoint that takes its project
//! id as a query parameter instead of the `X-Project-ID` header — an
//! `EventSource` client can't set custom headers — so it sits outside the
//! project-scope middleware and resolves the project itself.

use std::convert::Infallible;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use axum::Router;
use futures::Stream;
use serde::Deserialize;

use ateam_broker::SubscriptionItem;
use ateam_core::ProjectId;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventsQuery {
    project_id: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/board/events", get(stream_events))
}

async fn stream_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let project = ProjectId::normalize(&query.project_id)?;
    state.engine.store().ensure_project(&project, state.engine.now_ms());

    let subscription = state.engine.broker().subscribe(project);
    let stream = futures::stream::unfold(subscription, |mut subscription| async move {
        match subscription.next().await {
            SubscriptionItem::Event(event) => {
                let timestamp_ms =
                    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0);
                let payload = ateam_wire::sse::to_json(&event, timestamp_ms);
                Some((Ok(Event::default().data(payload)), subscription))
            }
            SubscriptionItem::Heartbeat => Some((Ok(Event::default().comment("heartbeat")), subscription)),
            SubscriptionItem::Closed => None,
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
