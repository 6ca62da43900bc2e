// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::step::Step;
use courtside_domain::{Coach, Court, Equipment, TimeSlot};

/// A command represents a customer's selection intent as data only.
///
/// Commands are the only way to change a booking session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set or clear the date. Always clears the time slot.
    SetDate(Option<time::Date>),
    /// Set or clear the time slot.
    SetTimeSlot(Option<TimeSlot>),
    /// Set or clear the court. Other choices are kept.
    SetCourt(Option<Court>),
    /// Add the item if no item with its id is selected, otherwise remove it.
    ToggleEquipment(Equipment),
    /// Set or clear the coach.
    SetCoach(Option<Coach>),
    /// Advance one step, stopping at the last.
    NextStep,
    /// Go back one step, stopping at the first.
    PrevStep,
    /// Jump directly to a step.
    GoToStep(Step),
    /// Restore the empty selection and the first step.
    Reset,
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetDate(_) => "SetDate",
            Self::SetTimeSlot(_) => "SetTimeSlot",
            Self::SetCourt(_) => "SetCourt",
            Self::ToggleEquipment(_) => "ToggleEquipment",
            Self::SetCoach(_) => "SetCoach",
            Self::NextStep => "NextStep",
            Self::PrevStep => "PrevStep",
            Self::GoToStep(_) => "GoToStep",
            Self::Reset => "Reset",
        }
    }
}
