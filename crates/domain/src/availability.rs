// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only availability checks over catalog snapshots.
//!
//! These checks are advisory. The booking steps use them to decide what a
//! customer may pick; the selection state machine does not enforce them.

use crate::pricing_rule::{PricingRule, RuleKind, peak_window_contains};
use crate::selection::BookingSelection;
use crate::types::{Coach, Court, Equipment, TimeSlot, day_of_week};

/// Checks whether a coach can take a session for the selected date and slot.
///
/// A coach is available when one of their availability windows is on the
/// selected weekday and covers the slot's start time. Without both a date
/// and a slot, no coach is available.
#[must_use]
pub fn is_coach_available(coach: &Coach, selection: &BookingSelection) -> bool {
    let (Some(date), Some(slot)) = (selection.date, selection.time_slot.as_ref()) else {
        return false;
    };
    let day: u8 = day_of_week(date);

    coach
        .availability
        .iter()
        .any(|window| window.covers(day, slot.start_time))
}

/// Checks whether at least one unit of an equipment item is free to rent.
#[must_use]
pub const fn is_equipment_available(item: &Equipment) -> bool {
    item.available_quantity > 0
}

/// Checks whether a court can be chosen for a new booking.
#[must_use]
pub const fn is_court_selectable(court: &Court) -> bool {
    court.is_active
}

/// Returns the active coaches that can take the selected date and slot.
#[must_use]
pub fn available_coaches<'a>(coaches: &'a [Coach], selection: &BookingSelection) -> Vec<&'a Coach> {
    coaches
        .iter()
        .filter(|c| c.is_active && is_coach_available(c, selection))
        .collect()
}

/// Checks whether any active peak hours rule covers a slot.
///
/// Used to badge slots before a court is chosen, so only the slot is
/// considered.
#[must_use]
pub fn is_peak_slot(slot: &TimeSlot, rules: &[PricingRule]) -> bool {
    rules.iter().filter(|r| r.is_active).any(|r| match &r.kind {
        RuleKind::PeakHours {
            start_time,
            end_time,
        } => peak_window_contains(*start_time, *end_time, slot),
        _ => false,
    })
}
