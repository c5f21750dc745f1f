// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP boundary error mapping (§4.10, §6.1, §6.2): the only place a
//! [`DomainError`] becomes an HTTP status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use ateam_core::{DomainError, ErrorCode};
use ateam_wire::ApiResponse;

/// Wraps a [`DomainError`] for use as an axum handler error type.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl<E: Into<DomainError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code);
        match self.0.code {
            ErrorCode::DatabaseError | ErrorCode::ServerError => {
                tracing::error!(code = %self.0.code, message = %self.0.message, "request failed");
            }
            _ => tracing::warn!(code = %self.0.code, message = %self.0.message, "request rejected"),
        }
        (status, Json(ApiResponse::<()>::from(self.0))).into_response()
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationError | ErrorCode::InvalidStage | ErrorCode::DependencyCycle => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::ClaimMismatch => StatusCode::FORBIDDEN,
        ErrorCode::ItemNotFound | ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidTransition
        | ErrorCode::WipLimitExceeded
        | ErrorCode::OutputCollision
        | ErrorCode::NotReady
        | ErrorCode::ClaimConflict
        | ErrorCode::NotClaimed
        | ErrorCode::AgentBusy
        | ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
