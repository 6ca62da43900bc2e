// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking confirmation and lifecycle transitions.
//!
//! ## Invariants
//!
//! - A session is only reset after its booking has been stored
//! - A failed confirmation leaves the session exactly as it was
//! - Availability checks at confirmation are advisory and only logged
//! - Status changes are checked against the booking lifecycle before they
//!   reach the store

use crate::config::BookingConfig;
use crate::error::ApiError;
use crate::store::{BookingStore, StoreError};
use courtside::{BookingDraft, BookingSession, finalize};
use courtside_domain::{
    Booking, BookingSelection, BookingStatus, Catalog, is_coach_available, is_court_selectable,
    is_equipment_available, validate_booking_date,
};
use time::OffsetDateTime;
use tracing::{info, warn};

/// Generates a booking id of the form `bk_<unix seconds>_<random hex>`.
#[must_use]
pub fn generate_booking_id(now: OffsetDateTime) -> String {
    format!(
        "bk_{}_{:08x}",
        now.unix_timestamp(),
        rand::random::<u32>()
    )
}

/// Confirms the session's selection as a booking for `user_id`.
///
/// The selection is priced against the catalog's rules, checked against the
/// booking window, and handed to the store. Once the store accepts it, the
/// session is reset to an empty selection on the first step.
///
/// # Arguments
///
/// * `session` - A session on the confirm step
/// * `catalog` - The catalog supplying the pricing rules
/// * `store` - Where the booking is persisted
/// * `config` - The booking window
/// * `user_id` - The customer making the booking
/// * `now` - The confirmation time
///
/// # Errors
///
/// Returns an error if:
/// - The session is not on the confirm step or the selection is incomplete
/// - The date is in the past or beyond the booking window
/// - The store fails to save the booking
///
/// The session is not modified on error.
pub fn confirm_booking<S: BookingStore>(
    session: &mut BookingSession,
    catalog: &Catalog,
    store: &mut S,
    config: &BookingConfig,
    user_id: &str,
    now: OffsetDateTime,
) -> Result<Booking, ApiError> {
    let draft: BookingDraft = BookingDraft {
        booking_id: generate_booking_id(now),
        user_id: user_id.to_string(),
        created_at: now,
    };
    let booking: Booking = finalize(session, catalog.pricing_rules(), draft)?;

    // finalize guarantees a date
    if let Some(date) = session.selection().date {
        validate_booking_date(date, now.date(), config.max_advance_days)?;
    }

    log_advisory_checks(session.selection(), catalog);

    if let Err(err) = store.save_booking(&booking) {
        warn!(
            booking_id = %booking.id,
            user_id,
            error = %err,
            "Failed to save booking; selection kept"
        );
        return Err(err.into());
    }

    info!(
        booking_id = %booking.id,
        user_id,
        court_id = %booking.court_id,
        total = booking.total_price,
        "Booking confirmed"
    );

    session.reset_booking();
    Ok(booking)
}

/// Cancels a confirmed booking.
///
/// # Errors
///
/// Returns an error if the booking does not exist, is already cancelled or
/// completed, or the store fails.
pub fn cancel_booking<S: BookingStore>(
    store: &mut S,
    booking_id: &str,
) -> Result<Booking, ApiError> {
    transition_booking(store, booking_id, BookingStatus::Cancelled)
}

/// Marks a confirmed booking as played.
///
/// # Errors
///
/// Returns an error if the booking does not exist, is already cancelled or
/// completed, or the store fails.
pub fn complete_booking<S: BookingStore>(
    store: &mut S,
    booking_id: &str,
) -> Result<Booking, ApiError> {
    transition_booking(store, booking_id, BookingStatus::Completed)
}

fn transition_booking<S: BookingStore>(
    store: &mut S,
    booking_id: &str,
    status: BookingStatus,
) -> Result<Booking, ApiError> {
    let mut booking: Booking = store
        .find_booking(booking_id)?
        .ok_or_else(|| StoreError::NotFound(booking_id.to_string()))?;

    booking.transition_to(status)?;
    store.update_status(booking_id, status)?;

    info!(booking_id, status = %status, "Booking status updated");
    Ok(booking)
}

fn log_advisory_checks(selection: &BookingSelection, catalog: &Catalog) {
    if let Some(court) = selection.court.as_ref() {
        match catalog.court(&court.id) {
            Ok(current) if !is_court_selectable(current) => {
                warn!(court_id = %court.id, "Booking an inactive court");
            }
            Ok(_) => {}
            Err(err) => {
                warn!(court_id = %court.id, error = %err, "Booking a court outside the catalog");
            }
        }
    }

    for item in &selection.equipment {
        let in_stock: bool = catalog
            .equipment_item(&item.id)
            .map_or_else(|_| is_equipment_available(item), is_equipment_available);
        if !in_stock {
            warn!(equipment_id = %item.id, "Booking equipment that is out of stock");
        }
    }

    if let Some(coach) = selection.coach.as_ref()
        && !is_coach_available(coach, selection)
    {
        warn!(coach_id = %coach.id, "Booking a coach outside their availability");
    }
}
