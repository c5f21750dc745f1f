// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response envelope (§6.1): `{success: true, data}` or `{success: false, error}`.

use ateam_core::DomainError;
use serde::{Serialize, Serializer};

/// Wraps every HTTP response body. Hand-rolls `Serialize` because the
/// envelope's `success` field is a JSON boolean discriminant, not a variant
/// name, which `#[serde(tag = ...)]` cannot express directly.
#[derive(Debug)]
pub enum ApiResponse<T> {
    Ok(T),
    Err(DomainError),
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse::Ok(data)
    }
}

impl<T> From<DomainError> for ApiResponse<T> {
    fn from(error: DomainError) -> Self {
        ApiResponse::Err(error)
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        match self {
            ApiResponse::Ok(data) => {
                let mut s = serializer.serialize_struct("ApiResponse", 2)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("data", data)?;
                s.end()
            }
            ApiResponse::Err(error) => {
                let mut s = serializer.serialize_struct("ApiResponse", 2)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("error", error)?;
                s.end()
            }
        }
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
