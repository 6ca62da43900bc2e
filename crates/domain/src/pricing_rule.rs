// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pricing rules and their applicability checks.
//!
//! A pricing rule is a conditional multiplicative surcharge on the court
//! price. The condition a rule tests is determined by its kind:
//!
//! - `peak_hours`: the selected slot starts within an hour range
//! - `weekend`: the selected date falls on one of a set of weekdays
//! - `indoor_premium`: the selected court has a given court type
//! - `custom`: never applies on its own
//!
//! Rules are evaluated against a `BookingSelection` and are never mutated by
//! the pricing engine.

use crate::error::DomainError;
use crate::selection::BookingSelection;
use crate::types::{ClockTime, CourtType, TimeSlot, day_name, day_of_week};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The condition a pricing rule tests, together with its payload.
///
/// Serialized adjacently tagged: `{"type": "peak_hours", "conditions": {...}}`.
/// A `custom` rule may omit `conditions` or carry any object there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "conditions",
    rename_all = "snake_case",
    rename_all_fields = "camelCase",
    try_from = "RawRuleKind"
)]
pub enum RuleKind {
    /// Applies when the selected slot starts inside `[start_time, end_time)`.
    ///
    /// Only the hour of each bound is compared. A missing start defaults to
    /// hour 0 and a missing end to hour 24.
    PeakHours {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_time: Option<ClockTime>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_time: Option<ClockTime>,
    },
    /// Applies when the selected date falls on one of these days (0 = Sunday).
    Weekend { days_of_week: BTreeSet<u8> },
    /// Applies when the selected court has this type.
    IndoorPremium { court_type: CourtType },
    /// Requires bespoke logic; never applies automatically.
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RuleType {
    PeakHours,
    Weekend,
    IndoorPremium,
    Custom,
}

/// Every condition any rule type may carry. Fields a type does not use are
/// ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawConditions {
    start_time: Option<ClockTime>,
    end_time: Option<ClockTime>,
    days_of_week: Option<BTreeSet<u8>>,
    court_type: Option<CourtType>,
}

#[derive(Debug, Deserialize)]
struct RawRuleKind {
    #[serde(rename = "type")]
    rule_type: RuleType,
    #[serde(default)]
    conditions: RawConditions,
}

impl TryFrom<RawRuleKind> for RuleKind {
    type Error = DomainError;

    fn try_from(raw: RawRuleKind) -> Result<Self, Self::Error> {
        let conditions: RawConditions = raw.conditions;
        match raw.rule_type {
            RuleType::PeakHours => Ok(Self::PeakHours {
                start_time: conditions.start_time,
                end_time: conditions.end_time,
            }),
            RuleType::Weekend => Ok(Self::Weekend {
                days_of_week: conditions.days_of_week.ok_or(
                    DomainError::MissingRuleCondition {
                        rule_type: "weekend",
                        field: "daysOfWeek",
                    },
                )?,
            }),
            RuleType::IndoorPremium => Ok(Self::IndoorPremium {
                court_type: conditions.court_type.ok_or(
                    DomainError::MissingRuleCondition {
                        rule_type: "indoor_premium",
                        field: "courtType",
                    },
                )?,
            }),
            RuleType::Custom => Ok(Self::Custom),
        }
    }
}

impl RuleKind {
    /// Returns the wire name of this rule kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PeakHours { .. } => "peak_hours",
            Self::Weekend { .. } => "weekend",
            Self::IndoorPremium { .. } => "indoor_premium",
            Self::Custom => "custom",
        }
    }
}

/// A configurable surcharge on the court price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    pub id: String,
    pub name: String,
    /// Multiplicative factor applied to the court price, e.g. 1.5 for +50%.
    pub multiplier: f64,
    pub is_active: bool,
    #[serde(flatten)]
    pub kind: RuleKind,
}

impl PricingRule {
    /// Checks whether this rule applies to the given selection.
    ///
    /// This does not look at `is_active`; filtering inactive rules is the
    /// caller's job.
    #[must_use]
    pub fn applies_to(&self, selection: &BookingSelection) -> bool {
        match &self.kind {
            RuleKind::PeakHours {
                start_time,
                end_time,
            } => selection
                .time_slot
                .as_ref()
                .is_some_and(|slot| peak_window_contains(*start_time, *end_time, slot)),
            RuleKind::Weekend { days_of_week } => selection
                .date
                .is_some_and(|date| days_of_week.contains(&day_of_week(date))),
            RuleKind::IndoorPremium { court_type } => selection
                .court
                .as_ref()
                .is_some_and(|court| court.court_type == *court_type),
            RuleKind::Custom => false,
        }
    }

    /// Returns the surcharge as a percentage, e.g. 50.0 for a 1.5 multiplier.
    #[must_use]
    pub fn surcharge_percent(&self) -> f64 {
        (self.multiplier - 1.0) * 100.0
    }

    /// Returns a human-readable description of when this rule applies.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            RuleKind::PeakHours {
                start_time,
                end_time,
            } => format!(
                "Applies during {} - {}",
                start_time.unwrap_or(ClockTime::MIDNIGHT),
                end_time.unwrap_or(ClockTime::END_OF_DAY)
            ),
            RuleKind::Weekend { days_of_week } => {
                // Sunday last so that a Saturday/Sunday rule reads naturally.
                let mut days: Vec<u8> = days_of_week.iter().copied().collect();
                days.sort_by_key(|day| if *day == 0 { 7 } else { *day });
                let names: Vec<&str> = days.into_iter().map(day_name).collect();
                format!("Applies on {}", join_names(&names))
            }
            RuleKind::IndoorPremium { court_type } => {
                format!("Applies to {court_type} courts only")
            }
            RuleKind::Custom => String::from("Custom pricing rule"),
        }
    }
}

/// Checks whether a slot's start hour falls inside a peak window.
///
/// Minutes are ignored on both the slot and the bounds.
pub(crate) fn peak_window_contains(
    start_time: Option<ClockTime>,
    end_time: Option<ClockTime>,
    slot: &TimeSlot,
) -> bool {
    let slot_hour: u8 = slot.start_time.hour();
    let start_hour: u8 = start_time.map_or(0, |t| t.hour());
    let end_hour: u8 = end_time.map_or(24, |t| t.hour());
    slot_hour >= start_hour && slot_hour < end_hour
}

fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
