// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use courtside_domain::{ClockTime, TimeSlot};
use serde::{Deserialize, Serialize};

const DEFAULT_MAX_ADVANCE_DAYS: u16 = 30;
const DEFAULT_OPENING_HOUR: u8 = 8;
const DEFAULT_CLOSING_HOUR: u8 = 22;

/// Venue-level booking settings.
///
/// Every field is optional in JSON and falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingConfig {
    /// How many days ahead of today a booking may be made.
    pub max_advance_days: u16,
    /// First bookable hour (inclusive).
    pub opening_hour: u8,
    /// Hour the venue closes (exclusive).
    pub closing_hour: u8,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_advance_days: DEFAULT_MAX_ADVANCE_DAYS,
            opening_hour: DEFAULT_OPENING_HOUR,
            closing_hour: DEFAULT_CLOSING_HOUR,
        }
    }
}

impl BookingConfig {
    /// Parses and validates a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the hours are out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ApiError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the opening hours describe a non-empty day.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if:
    /// - The closing hour is after 24
    /// - The closing hour is not after the opening hour
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.closing_hour > 24 {
            return Err(ApiError::InvalidConfig(format!(
                "closingHour {} is after 24",
                self.closing_hour
            )));
        }
        if self.closing_hour <= self.opening_hour {
            return Err(ApiError::InvalidConfig(format!(
                "closingHour {} must be after openingHour {}",
                self.closing_hour, self.opening_hour
            )));
        }
        Ok(())
    }

    /// Returns the hourly slots between opening and closing.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn time_slots(&self) -> Result<Vec<TimeSlot>, ApiError> {
        self.validate()?;
        (self.opening_hour..self.closing_hour)
            .map(|hour| -> Result<TimeSlot, ApiError> {
                Ok(TimeSlot::new(
                    ClockTime::from_hour(hour)?,
                    ClockTime::from_hour(hour + 1)?,
                ))
            })
            .collect()
    }
}
