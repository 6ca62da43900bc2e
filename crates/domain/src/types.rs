// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether a court is covered or open-air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtType {
    /// A covered, climate-controlled court.
    Indoor,
    /// An open-air court.
    Outdoor,
}

impl CourtType {
    /// Converts this court type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
        }
    }
}

impl FromStr for CourtType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indoor" => Ok(Self::Indoor),
            "outdoor" => Ok(Self::Outdoor),
            _ => Err(DomainError::InvalidCourtType(s.to_string())),
        }
    }
}

impl std::fmt::Display for CourtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The category of a rentable equipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Racket,
    Shoes,
    Other,
}

impl EquipmentType {
    /// Converts this equipment type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Racket => "racket",
            Self::Shoes => "shoes",
            Self::Other => "other",
        }
    }
}

impl FromStr for EquipmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "racket" => Ok(Self::Racket),
            "shoes" => Ok(Self::Shoes),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidEquipmentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A wall-clock time of day in 24-hour `HH:MM` form.
///
/// Valid values run from `00:00` to `23:59`. `24:00` is also accepted so
/// that a range can close at the end of the day.
///
/// Ordering follows the time of day, which matches lexicographic ordering of
/// the zero-padded string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// The start of the day (`00:00`).
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// The end of the day (`24:00`).
    pub const END_OF_DAY: Self = Self {
        hour: 24,
        minute: 0,
    };

    /// Creates a new `ClockTime`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour or minute is out of range.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 24 || minute > 59 || (hour == 24 && minute != 0) {
            return Err(DomainError::InvalidClockTime(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Creates a `ClockTime` on the hour.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour is greater than 24.
    pub fn from_hour(hour: u8) -> Result<Self, DomainError> {
        Self::new(hour, 0)
    }

    /// Returns the hour component (0-24).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute component (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for ClockTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidClockTime(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let is_two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !is_two_digits(hour) || !is_two_digits(minute) {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Returns the day of week for a date, with Sunday as 0 and Saturday as 6.
#[must_use]
pub const fn day_of_week(date: time::Date) -> u8 {
    date.weekday().number_days_from_sunday()
}

/// Returns the English name of a day of week (0 = Sunday).
#[must_use]
pub const fn day_name(day: u8) -> &'static str {
    match day {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Unknown",
    }
}

/// A bookable window of time on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Slot start (inclusive).
    pub start_time: ClockTime,
    /// Slot end (exclusive).
    pub end_time: ClockTime,
    /// Whether the slot can currently be booked.
    pub is_available: bool,
}

impl TimeSlot {
    /// Creates a new available `TimeSlot`.
    #[must_use]
    pub const fn new(start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            start_time,
            end_time,
            is_available: true,
        }
    }
}

/// A court that can be reserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub court_type: CourtType,
    /// Price per hour before any pricing rule is applied.
    pub base_price: f64,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A rentable equipment item.
///
/// `available_quantity` never exceeds `quantity`; the catalog rejects
/// entries that break this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    /// Total units owned.
    pub quantity: u32,
    /// Units currently free to rent.
    pub available_quantity: u32,
    pub price_per_hour: f64,
    pub is_active: bool,
}

/// A weekly window during which a coach takes sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachAvailability {
    /// Day of week, 0 = Sunday.
    pub day_of_week: u8,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl CoachAvailability {
    /// Checks whether this window covers a session starting at `start` on `day`.
    ///
    /// The window is half-open: a session may start at `start_time` but not
    /// at `end_time`.
    #[must_use]
    pub fn covers(&self, day: u8, start: ClockTime) -> bool {
        self.day_of_week == day && self.start_time <= start && start < self.end_time
    }
}

/// A coach available for private sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub price_per_hour: f64,
    /// Display-only rating.
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub availability: Vec<CoachAvailability>,
    pub is_active: bool,
}

impl Coach {
    /// Returns the first letter of each part of the coach's name.
    ///
    /// "Maria Santos" becomes "MS".
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}
