// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingStore, StoreError, load_catalog};
use courtside::{BookingSession, Step};
use courtside_domain::{Booking, BookingStatus, Catalog, ClockTime, TimeSlot};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

/// Sunday, six days before `SATURDAY`.
pub const NOW: OffsetDateTime = datetime!(2026-03-01 10:30:00 UTC);
/// Saturday.
pub const SATURDAY: Date = date!(2026 - 03 - 07);

pub const CATALOG_JSON: &str = r#"{
    "courts": [
        {"id": "court-1", "name": "Center Court", "type": "indoor", "basePrice": 30.0, "isActive": true},
        {"id": "court-2", "name": "Garden Court", "type": "outdoor", "basePrice": 20.0, "isActive": true,
         "description": "Clay surface"},
        {"id": "court-3", "name": "Old Court", "type": "outdoor", "basePrice": 15.0, "isActive": false}
    ],
    "equipment": [
        {"id": "eq-racket", "name": "Pro Racket", "type": "racket", "quantity": 10,
         "availableQuantity": 4, "pricePerHour": 5.0, "isActive": true},
        {"id": "eq-shoes", "name": "Court Shoes", "type": "shoes", "quantity": 6,
         "availableQuantity": 0, "pricePerHour": 3.0, "isActive": true}
    ],
    "coaches": [
        {"id": "coach-1", "name": "Maria Santos", "specialization": "Doubles strategy",
         "pricePerHour": 40.0, "rating": 4.9, "isActive": true,
         "availability": [{"dayOfWeek": 6, "startTime": "10:00", "endTime": "20:00"}]}
    ],
    "pricingRules": [
        {"id": "rule-indoor", "name": "Indoor Premium", "multiplier": 1.2, "isActive": true,
         "type": "indoor_premium", "conditions": {"courtType": "indoor"}},
        {"id": "rule-peak", "name": "Peak Hours", "multiplier": 1.5, "isActive": true,
         "type": "peak_hours", "conditions": {"startTime": "18:00", "endTime": "21:00"}},
        {"id": "rule-weekend", "name": "Weekend Rate", "multiplier": 1.25, "isActive": true,
         "type": "weekend", "conditions": {"daysOfWeek": [0, 6]}},
        {"id": "rule-holiday", "name": "Holiday Rate", "multiplier": 2.0, "isActive": true,
         "type": "custom"}
    ]
}"#;

pub fn create_test_catalog() -> Catalog {
    load_catalog(CATALOG_JSON).unwrap()
}

pub fn create_test_slot(hour: u8) -> TimeSlot {
    TimeSlot::new(
        ClockTime::from_hour(hour).unwrap(),
        ClockTime::from_hour(hour + 1).unwrap(),
    )
}

/// A session built from catalog entries, sitting on the confirm step.
///
/// Saturday 19:00 on the indoor court with a racket and a coach.
pub fn create_confirm_session(catalog: &Catalog) -> BookingSession {
    let mut session: BookingSession = BookingSession::new();
    session.set_date(Some(SATURDAY));
    session.set_time_slot(Some(create_test_slot(19)));
    session.set_court(Some(catalog.court("court-1").unwrap().clone()));
    session.toggle_equipment(catalog.equipment_item("eq-racket").unwrap().clone());
    session.set_coach(Some(catalog.coach("coach-1").unwrap().clone()));
    session.go_to_step(Step::Confirm);
    session
}

pub fn assert_amount(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// A store whose backend is always down.
#[derive(Debug, Default)]
pub struct FailingStore;

impl BookingStore for FailingStore {
    fn save_booking(&mut self, _booking: &Booking) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(String::from("connection refused")))
    }

    fn find_booking(&self, _booking_id: &str) -> Result<Option<Booking>, StoreError> {
        Err(StoreError::Unavailable(String::from("connection refused")))
    }

    fn bookings_for_user(&self, _user_id: &str) -> Result<Vec<Booking>, StoreError> {
        Err(StoreError::Unavailable(String::from("connection refused")))
    }

    fn update_status(
        &mut self,
        _booking_id: &str,
        _status: BookingStatus,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(String::from("connection refused")))
    }
}
