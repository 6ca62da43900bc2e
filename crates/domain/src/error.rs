// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::BookingStatus;
use crate::types::ClockTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A clock time was not a valid `HH:MM` value.
    InvalidClockTime(String),
    /// A court type string was not recognized.
    InvalidCourtType(String),
    /// An equipment type string was not recognized.
    InvalidEquipmentType(String),
    /// A booking status string was not recognized.
    InvalidBookingStatus(String),
    /// A catalog entry has an empty identifier.
    EmptyId {
        /// The kind of catalog entry.
        kind: &'static str,
    },
    /// A catalog entry has an empty name.
    EmptyName {
        /// The kind of catalog entry.
        kind: &'static str,
        /// The entry identifier.
        id: String,
    },
    /// A price is zero, negative, or not finite.
    NonPositivePrice {
        /// The kind of catalog entry.
        kind: &'static str,
        /// The entry identifier.
        id: String,
        /// The rejected price.
        price: f64,
    },
    /// Equipment reports more available units than it owns.
    AvailableExceedsQuantity {
        /// The equipment identifier.
        id: String,
        /// The available unit count.
        available: u32,
        /// The total unit count.
        quantity: u32,
    },
    /// A day of week outside `0..=6`.
    InvalidDayOfWeek(u8),
    /// A time range whose start is not before its end.
    InvalidTimeRange {
        /// The range start.
        start: ClockTime,
        /// The range end.
        end: ClockTime,
    },
    /// A pricing rule multiplier is zero, negative, or not finite.
    NonPositiveMultiplier {
        /// The rule identifier.
        id: String,
        /// The rejected multiplier.
        multiplier: f64,
    },
    /// A peak hours rule is missing its start or end bound.
    UnboundedPeakHours {
        /// The rule identifier.
        id: String,
    },
    /// A pricing rule's conditions lack a field its type needs.
    MissingRuleCondition {
        /// The rule type, e.g. `weekend`.
        rule_type: &'static str,
        /// The missing condition field.
        field: &'static str,
    },
    /// A weekend rule lists no days.
    EmptyWeekendDays {
        /// The rule identifier.
        id: String,
    },
    /// Two catalog entries of the same kind share an identifier.
    DuplicateId {
        /// The kind of catalog entry.
        kind: &'static str,
        /// The duplicated identifier.
        id: String,
    },
    /// A catalog lookup found no entry with the given identifier.
    NotFound {
        /// The kind of catalog entry.
        kind: &'static str,
        /// The identifier that was looked up.
        id: String,
    },
    /// A booking date lies before today.
    DateInPast {
        /// The requested date.
        date: time::Date,
        /// The current date.
        today: time::Date,
    },
    /// A booking date lies beyond the advance booking window.
    DateBeyondBookingWindow {
        /// The requested date.
        date: time::Date,
        /// The latest bookable date.
        latest: time::Date,
    },
    /// A booking status change that the lifecycle does not allow.
    InvalidStatusTransition {
        /// The current status.
        from: BookingStatus,
        /// The requested status.
        to: BookingStatus,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClockTime(value) => {
                write!(f, "Invalid clock time '{value}': expected HH:MM")
            }
            Self::InvalidCourtType(value) => write!(f, "Invalid court type: {value}"),
            Self::InvalidEquipmentType(value) => write!(f, "Invalid equipment type: {value}"),
            Self::InvalidBookingStatus(value) => write!(f, "Invalid booking status: {value}"),
            Self::EmptyId { kind } => write!(f, "{kind} id cannot be empty"),
            Self::EmptyName { kind, id } => write!(f, "{kind} '{id}' has an empty name"),
            Self::NonPositivePrice { kind, id, price } => {
                write!(f, "{kind} '{id}' has invalid price {price}: must be positive")
            }
            Self::AvailableExceedsQuantity {
                id,
                available,
                quantity,
            } => {
                write!(
                    f,
                    "Equipment '{id}' reports {available} available but only {quantity} owned"
                )
            }
            Self::InvalidDayOfWeek(day) => {
                write!(f, "Invalid day of week {day}: must be between 0 and 6")
            }
            Self::InvalidTimeRange { start, end } => {
                write!(f, "Invalid time range {start} - {end}: start must be before end")
            }
            Self::NonPositiveMultiplier { id, multiplier } => {
                write!(
                    f,
                    "Pricing rule '{id}' has invalid multiplier {multiplier}: must be positive"
                )
            }
            Self::UnboundedPeakHours { id } => {
                write!(f, "Peak hours rule '{id}' must define both start and end times")
            }
            Self::MissingRuleCondition { rule_type, field } => {
                write!(f, "A {rule_type} rule requires the '{field}' condition")
            }
            Self::EmptyWeekendDays { id } => {
                write!(f, "Weekend rule '{id}' must list at least one day")
            }
            Self::DuplicateId { kind, id } => write!(f, "Duplicate {kind} id '{id}'"),
            Self::NotFound { kind, id } => write!(f, "{kind} '{id}' not found"),
            Self::DateInPast { date, today } => {
                write!(f, "Booking date {date} is before today ({today})")
            }
            Self::DateBeyondBookingWindow { date, latest } => {
                write!(
                    f,
                    "Booking date {date} is beyond the booking window (latest {latest})"
                )
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot change booking status from {from} to {to}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
