// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::{BookingSession, Requirement};
use crate::step::Step;
use courtside_domain::{
    Booking, BookingSelection, BookingStatus, Court, PriceBreakdown, PricingRule, TimeSlot,
    calculate_price,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Identity and timestamp assigned to a booking by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub booking_id: String,
    pub user_id: String,
    pub created_at: OffsetDateTime,
}

/// Turns a completed session into a confirmed `Booking`.
///
/// The session is not modified. Resetting it after the booking has been
/// stored is the caller's responsibility.
///
/// # Arguments
///
/// * `session` - A session on the confirm step
/// * `rules` - The pricing rules to price the booking with
/// * `draft` - The booking id, user id, and creation time
///
/// # Errors
///
/// Returns an error if:
/// - The session is not on the confirm step
/// - The selection has no date, time slot, or court
/// - The creation timestamp cannot be formatted
pub fn finalize(
    session: &BookingSession,
    rules: &[PricingRule],
    draft: BookingDraft,
) -> Result<Booking, CoreError> {
    if session.step() != Step::Confirm {
        return Err(CoreError::NotAtConfirmation {
            step: session.step(),
        });
    }

    let selection: &BookingSelection = session.selection();
    let date: time::Date = selection
        .date
        .ok_or(CoreError::IncompleteSelection(Requirement::Date))?;
    let slot: TimeSlot = selection
        .time_slot
        .ok_or(CoreError::IncompleteSelection(Requirement::TimeSlot))?;
    let court: &Court = selection
        .court
        .as_ref()
        .ok_or(CoreError::IncompleteSelection(Requirement::Court))?;

    let created_at: String = draft
        .created_at
        .format(&Rfc3339)
        .map_err(|err| CoreError::TimestampFormat(err.to_string()))?;

    let price_breakdown: PriceBreakdown = calculate_price(selection, rules);

    Ok(Booking {
        id: draft.booking_id,
        user_id: draft.user_id,
        court_id: court.id.clone(),
        date: date.to_string(),
        start_time: slot.start_time.to_string(),
        end_time: slot.end_time.to_string(),
        equipment: selection.equipment.iter().map(|e| e.id.clone()).collect(),
        coach_id: selection.coach.as_ref().map(|c| c.id.clone()),
        total_price: price_breakdown.total,
        price_breakdown,
        status: BookingStatus::Confirmed,
        created_at,
    })
}
