// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persistence seam for confirmed bookings.
//!
//! The booking flow never talks to a database directly. It hands finished
//! bookings to a `BookingStore`, which may be backed by anything.

use courtside_domain::{Booking, BookingStatus};
use thiserror::Error;

/// Errors a booking store may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write.
    #[error("store rejected the request: {0}")]
    Rejected(String),

    /// A booking with this id already exists.
    #[error("booking '{0}' already exists")]
    Duplicate(String),

    /// No booking has this id.
    #[error("booking '{0}' not found")]
    NotFound(String),
}

/// Durable storage for bookings.
pub trait BookingStore {
    /// Persists a new booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking could not be stored. Nothing is
    /// stored in that case.
    fn save_booking(&mut self, booking: &Booking) -> Result<(), StoreError>;

    /// Looks up a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails. A missing booking is `Ok(None)`.
    fn find_booking(&self, booking_id: &str) -> Result<Option<Booking>, StoreError>;

    /// Returns every booking belonging to a user, in the order they were saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>, StoreError>;

    /// Overwrites the status of a stored booking.
    ///
    /// Lifecycle rules are checked by the caller, not the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no booking has this id.
    fn update_status(&mut self, booking_id: &str, status: BookingStatus)
    -> Result<(), StoreError>;
}

/// A `BookingStore` kept in memory, for tests and single-process use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    bookings: Vec<Booking>,
}

impl InMemoryBookingStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    /// Returns every stored booking in save order.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl BookingStore for InMemoryBookingStore {
    fn save_booking(&mut self, booking: &Booking) -> Result<(), StoreError> {
        if self.bookings.iter().any(|b| b.id == booking.id) {
            return Err(StoreError::Duplicate(booking.id.clone()));
        }
        self.bookings.push(booking.clone());
        Ok(())
    }

    fn find_booking(&self, booking_id: &str) -> Result<Option<Booking>, StoreError> {
        Ok(self.bookings.iter().find(|b| b.id == booking_id).cloned())
    }

    fn bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    fn update_status(
        &mut self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<(), StoreError> {
        let booking: &mut Booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| StoreError::NotFound(booking_id.to_string()))?;
        booking.status = status;
        Ok(())
    }
}
