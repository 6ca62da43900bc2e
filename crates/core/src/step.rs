// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A step of the booking wizard.
///
/// Steps are numbered 1 to 5 and navigation between them saturates at both
/// ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    /// Pick a date and time slot.
    #[default]
    DateTime,
    /// Pick a court.
    Court,
    /// Optionally rent equipment.
    Equipment,
    /// Optionally book a coach.
    Coach,
    /// Review and confirm.
    Confirm,
}

impl Step {
    /// Every step in wizard order.
    pub const ALL: [Self; 5] = [
        Self::DateTime,
        Self::Court,
        Self::Equipment,
        Self::Coach,
        Self::Confirm,
    ];

    /// Returns the 1-based step number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::DateTime => 1,
            Self::Court => 2,
            Self::Equipment => 3,
            Self::Coach => 4,
            Self::Confirm => 5,
        }
    }

    /// Returns the step with the given 1-based number, if there is one.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::DateTime),
            2 => Some(Self::Court),
            3 => Some(Self::Equipment),
            4 => Some(Self::Coach),
            5 => Some(Self::Confirm),
            _ => None,
        }
    }

    /// Returns the following step, or this step if it is the last.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::DateTime => Self::Court,
            Self::Court => Self::Equipment,
            Self::Equipment => Self::Coach,
            Self::Coach | Self::Confirm => Self::Confirm,
        }
    }

    /// Returns the preceding step, or this step if it is the first.
    #[must_use]
    pub const fn prev(&self) -> Self {
        match self {
            Self::DateTime | Self::Court => Self::DateTime,
            Self::Equipment => Self::Court,
            Self::Coach => Self::Equipment,
            Self::Confirm => Self::Coach,
        }
    }

    /// Returns the title shown for this step.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::DateTime => "Date & Time",
            Self::Court => "Select Court",
            Self::Equipment => "Equipment",
            Self::Coach => "Coach",
            Self::Confirm => "Confirm",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}
