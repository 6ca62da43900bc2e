// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod booking;
mod catalog;
mod error;
mod pricing;
mod pricing_rule;
mod selection;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{
    available_coaches, is_coach_available, is_court_selectable, is_equipment_available,
    is_peak_slot,
};
pub use booking::{Booking, BookingStatus};
pub use catalog::{Catalog, CatalogEntry, CatalogSnapshot, CatalogTable};
pub use pricing::{AppliedRule, PriceBreakdown, calculate_price};
pub use pricing_rule::{PricingRule, RuleKind};
pub use selection::BookingSelection;

// Re-export public types
pub use error::DomainError;
pub use types::{
    ClockTime, Coach, CoachAvailability, Court, CourtType, Equipment, EquipmentType, TimeSlot,
    day_name, day_of_week,
};
pub use validation::{
    validate_booking_date, validate_coach, validate_court, validate_day_of_week,
    validate_equipment, validate_pricing_rule,
};
