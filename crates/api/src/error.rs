// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors surfaced to collaborators of the booking flow.

use crate::store::StoreError;
use courtside::CoreError;
use courtside_domain::DomainError;
use thiserror::Error;

/// Errors returned by the collaborator boundary.
///
/// Domain and session errors pass through unchanged so callers can match on
/// the underlying cause.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The booking configuration is out of range.
    #[error("Invalid booking configuration: {0}")]
    InvalidConfig(String),

    /// A JSON document could not be parsed.
    #[error("Malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// The booking store refused or failed the request.
    #[error("Booking store error: {0}")]
    Store(#[from] StoreError),
}
