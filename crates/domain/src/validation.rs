// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::pricing_rule::{PricingRule, RuleKind};
use crate::types::{ClockTime, Coach, Court, Equipment};

/// Validates a court's field constraints.
///
/// # Errors
///
/// Returns an error if:
/// - The id or name is empty
/// - The base price is not positive
pub fn validate_court(court: &Court) -> Result<(), DomainError> {
    validate_identity("court", &court.id, &court.name)?;
    validate_price("court", &court.id, court.base_price)
}

/// Validates an equipment item's field constraints.
///
/// # Errors
///
/// Returns an error if:
/// - The id or name is empty
/// - The hourly price is not positive
/// - More units are available than are owned
pub fn validate_equipment(item: &Equipment) -> Result<(), DomainError> {
    validate_identity("equipment", &item.id, &item.name)?;
    validate_price("equipment", &item.id, item.price_per_hour)?;

    // Rule: available units never exceed owned units
    if item.available_quantity > item.quantity {
        return Err(DomainError::AvailableExceedsQuantity {
            id: item.id.clone(),
            available: item.available_quantity,
            quantity: item.quantity,
        });
    }
    Ok(())
}

/// Validates a coach's field constraints and availability windows.
///
/// # Errors
///
/// Returns an error if:
/// - The id or name is empty
/// - The hourly price is not positive
/// - An availability window has a day outside 0-6 or an empty time range
pub fn validate_coach(coach: &Coach) -> Result<(), DomainError> {
    validate_identity("coach", &coach.id, &coach.name)?;
    validate_price("coach", &coach.id, coach.price_per_hour)?;

    for window in &coach.availability {
        validate_day_of_week(window.day_of_week)?;
        validate_time_range(window.start_time, window.end_time)?;
    }
    Ok(())
}

/// Validates a pricing rule's multiplier and conditions.
///
/// Peak hours rules must carry both bounds. An unbounded rule would cover
/// the whole day and so apply to every booking.
///
/// # Errors
///
/// Returns an error if:
/// - The id or name is empty
/// - The multiplier is not positive
/// - A peak hours rule is missing a bound or its start hour is not before its end hour
/// - A weekend rule lists no days or a day outside 0-6
pub fn validate_pricing_rule(rule: &PricingRule) -> Result<(), DomainError> {
    validate_identity("pricing rule", &rule.id, &rule.name)?;

    if !rule.multiplier.is_finite() || rule.multiplier <= 0.0 {
        return Err(DomainError::NonPositiveMultiplier {
            id: rule.id.clone(),
            multiplier: rule.multiplier,
        });
    }

    match &rule.kind {
        RuleKind::PeakHours {
            start_time: Some(start),
            end_time: Some(end),
        } => {
            // Only hours are compared when pricing, so the range must span at least one hour
            if start.hour() >= end.hour() {
                return Err(DomainError::InvalidTimeRange {
                    start: *start,
                    end: *end,
                });
            }
        }
        RuleKind::PeakHours { .. } => {
            return Err(DomainError::UnboundedPeakHours {
                id: rule.id.clone(),
            });
        }
        RuleKind::Weekend { days_of_week } => {
            if days_of_week.is_empty() {
                return Err(DomainError::EmptyWeekendDays {
                    id: rule.id.clone(),
                });
            }
            for day in days_of_week {
                validate_day_of_week(*day)?;
            }
        }
        RuleKind::IndoorPremium { .. } | RuleKind::Custom => {}
    }
    Ok(())
}

/// Validates that a booking date is within the advance booking window.
///
/// # Arguments
///
/// * `date` - The requested booking date
/// * `today` - The current date
/// * `max_advance_days` - How many days ahead of today bookings may be made
///
/// # Errors
///
/// Returns an error if:
/// - The date is before today
/// - The date is more than `max_advance_days` after today
pub fn validate_booking_date(
    date: time::Date,
    today: time::Date,
    max_advance_days: u16,
) -> Result<(), DomainError> {
    if date < today {
        return Err(DomainError::DateInPast { date, today });
    }

    let latest: time::Date = today
        .checked_add(time::Duration::days(i64::from(max_advance_days)))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("adding {max_advance_days} days to {today}"),
        })?;

    if date > latest {
        return Err(DomainError::DateBeyondBookingWindow { date, latest });
    }
    Ok(())
}

/// Validates that a day of week is within 0 (Sunday) to 6 (Saturday).
///
/// # Errors
///
/// Returns an error if the day is greater than 6.
pub const fn validate_day_of_week(day: u8) -> Result<(), DomainError> {
    if day > 6 {
        return Err(DomainError::InvalidDayOfWeek(day));
    }
    Ok(())
}

fn validate_time_range(start: ClockTime, end: ClockTime) -> Result<(), DomainError> {
    if start >= end {
        return Err(DomainError::InvalidTimeRange { start, end });
    }
    Ok(())
}

fn validate_identity(kind: &'static str, id: &str, name: &str) -> Result<(), DomainError> {
    if id.trim().is_empty() {
        return Err(DomainError::EmptyId { kind });
    }
    if name.trim().is_empty() {
        return Err(DomainError::EmptyName {
            kind,
            id: id.to_string(),
        });
    }
    Ok(())
}

fn validate_price(kind: &'static str, id: &str, price: f64) -> Result<(), DomainError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::NonPositivePrice {
            kind,
            id: id.to_string(),
            price,
        });
    }
    Ok(())
}
