// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project scope guard (§4.6): validates and normalizes `X-Project-ID`,
//! creates the project on first use, and attaches it to the request so
//! every handler downstream can extract it.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use ateam_core::{DomainError, ErrorCode, ProjectId};

use crate::error::ApiError;
use crate::state::AppState;

const HEADER: &str = "X-Project-ID";

/// Installed as a `route_layer` on every project-scoped sub-router; runs
/// before the handler extracts [`ProjectScope`].
pub async fn require_project_scope(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let raw = req
        .headers()
        .get(HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| DomainError::new(ErrorCode::ValidationError, "missing X-Project-ID header"))?;

    let project = ProjectId::normalize(raw)?;
    state.engine.store().ensure_project(&project, state.engine.now_ms());
    req.extensions_mut().insert(project);

    Ok(next.run(req).await)
}

/// Extracts the [`ProjectId`] attached by [`require_project_scope`].
pub struct ProjectScope(pub ProjectId);

impl<S> FromRequestParts<S> for ProjectScope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ProjectId>()
            .cloned()
            .map(ProjectScope)
            .ok_or_else(|| {
                ApiError(DomainError::new(
                    ErrorCode::ServerError,
                    "project scope middleware did not run for this route",
                ))
            })
    }
}

#[cfg(test)]
#[path = "project_scope_tests.rs"]
mod tests;
