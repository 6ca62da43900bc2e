// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Requirement;
use crate::step::Step;
use courtside_domain::DomainError;

/// Errors that can occur while driving or finalizing a booking session.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A numeric step outside 1 to 5 was requested.
    InvalidStep(u8),
    /// The selection lacks a field required to book.
    IncompleteSelection(Requirement),
    /// Finalization was attempted before the confirmation step.
    NotAtConfirmation {
        /// The step the session is on.
        step: Step,
    },
    /// The creation timestamp could not be formatted.
    TimestampFormat(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidStep(step) => {
                write!(f, "Invalid step {step}: must be between 1 and 5")
            }
            Self::IncompleteSelection(requirement) => {
                write!(f, "Incomplete selection: {requirement} is required")
            }
            Self::NotAtConfirmation { step } => {
                write!(f, "Booking can only be finalized at the confirm step, not step {step}")
            }
            Self::TimestampFormat(msg) => write!(f, "Failed to format timestamp: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
