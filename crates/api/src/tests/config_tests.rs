// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, BookingConfig};
use courtside_domain::TimeSlot;

#[test]
fn test_default_config() {
    let config: BookingConfig = BookingConfig::default();

    assert_eq!(config.max_advance_days, 30);
    assert_eq!(config.opening_hour, 8);
    assert_eq!(config.closing_hour, 22);
}

#[test]
fn test_from_json_fills_missing_fields_with_defaults() {
    let config: BookingConfig = BookingConfig::from_json_str(r#"{"maxAdvanceDays": 14}"#).unwrap();

    assert_eq!(config.max_advance_days, 14);
    assert_eq!(config.opening_hour, 8);
    assert_eq!(config.closing_hour, 22);
}

#[test]
fn test_from_json_empty_object_is_default() {
    let config: BookingConfig = BookingConfig::from_json_str("{}").unwrap();

    assert_eq!(config, BookingConfig::default());
}

#[test]
fn test_from_json_rejects_closing_before_opening() {
    let result: Result<BookingConfig, ApiError> =
        BookingConfig::from_json_str(r#"{"openingHour": 20, "closingHour": 9}"#);

    assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
}

#[test]
fn test_from_json_rejects_equal_hours() {
    let result: Result<BookingConfig, ApiError> =
        BookingConfig::from_json_str(r#"{"openingHour": 9, "closingHour": 9}"#);

    assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
}

#[test]
fn test_from_json_rejects_closing_after_midnight() {
    let result: Result<BookingConfig, ApiError> =
        BookingConfig::from_json_str(r#"{"closingHour": 25}"#);

    assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
}

#[test]
fn test_from_json_rejects_malformed_document() {
    let result: Result<BookingConfig, ApiError> =
        BookingConfig::from_json_str(r#"{"maxAdvanceDays": -1}"#);

    assert!(matches!(result, Err(ApiError::Json(_))));
}

#[test]
fn test_time_slots_cover_opening_hours() {
    let slots: Vec<TimeSlot> = BookingConfig::default().time_slots().unwrap();

    assert_eq!(slots.len(), 14);
    assert_eq!(slots[0].start_time.to_string(), "08:00");
    assert_eq!(slots[0].end_time.to_string(), "09:00");
    assert_eq!(slots[13].start_time.to_string(), "21:00");
    assert_eq!(slots[13].end_time.to_string(), "22:00");
    assert!(slots.iter().all(|s| s.is_available));
}

#[test]
fn test_time_slots_allow_closing_at_midnight() {
    let config: BookingConfig = BookingConfig {
        max_advance_days: 30,
        opening_hour: 22,
        closing_hour: 24,
    };

    let slots: Vec<TimeSlot> = config.time_slots().unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].end_time.to_string(), "24:00");
}

#[test]
fn test_time_slots_reject_invalid_config() {
    let config: BookingConfig = BookingConfig {
        max_advance_days: 30,
        opening_hour: 10,
        closing_hour: 8,
    };

    assert!(config.time_slots().is_err());
}
