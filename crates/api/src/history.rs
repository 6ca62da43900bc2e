// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::quote::format_amount;
use crate::store::BookingStore;
use courtside_domain::{Booking, BookingStatus, Catalog, Court, CourtType};
use serde::{Deserialize, Serialize};

/// A stored booking resolved against the catalog for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingHistoryEntry {
    pub booking_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub court_name: String,
    pub court_type: CourtType,
    /// `None` when the booking had no coach or the coach left the catalog.
    pub coach_name: Option<String>,
    pub equipment_names: Vec<String>,
    pub status: BookingStatus,
    /// Whether the booking can still be cancelled or completed.
    pub is_open: bool,
    /// Formatted total, e.g. `$54.00`.
    pub total_price: String,
}

/// Lists a user's bookings with catalog names filled in.
///
/// Equipment ids no longer in the catalog are dropped from the entry.
///
/// # Errors
///
/// Returns an error if the store fails or a booking's court is not in the
/// catalog.
pub fn booking_history<S: BookingStore>(
    store: &S,
    catalog: &Catalog,
    user_id: &str,
) -> Result<Vec<BookingHistoryEntry>, ApiError> {
    store
        .bookings_for_user(user_id)?
        .into_iter()
        .map(|booking| history_entry(booking, catalog))
        .collect()
}

fn history_entry(booking: Booking, catalog: &Catalog) -> Result<BookingHistoryEntry, ApiError> {
    let court: &Court = catalog.court(&booking.court_id)?;
    let coach_name: Option<String> = booking
        .coach_id
        .as_deref()
        .and_then(|id| catalog.coach(id).ok())
        .map(|coach| coach.name.clone());
    let equipment_names: Vec<String> = booking
        .equipment
        .iter()
        .filter_map(|id| catalog.equipment_item(id).ok())
        .map(|item| item.name.clone())
        .collect();

    Ok(BookingHistoryEntry {
        booking_id: booking.id,
        date: booking.date,
        start_time: booking.start_time,
        end_time: booking.end_time,
        court_name: court.name.clone(),
        court_type: court.court_type,
        coach_name,
        equipment_names,
        status: booking.status,
        is_open: !booking.status.is_final(),
        total_price: format_amount(booking.total_price),
    })
}
