// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::step::Step;
use courtside_domain::{
    BookingSelection, Catalog, Coach, Court, Equipment, PriceBreakdown, PricingRule, TimeSlot,
    calculate_price,
};

/// A selection field that must be set before the wizard may advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Date,
    TimeSlot,
    Court,
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date => write!(f, "a date"),
            Self::TimeSlot => write!(f, "a time slot"),
            Self::Court => write!(f, "a court"),
        }
    }
}

/// One booking wizard session: the selection under construction and the
/// current step.
///
/// A session is owned by its caller and is the only thing that mutates its
/// selection. Every change goes through a `Command` and replaces the whole
/// state at once, so no partially updated selection is ever observable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingSession {
    pub(crate) selection: BookingSelection,
    pub(crate) step: Step,
}

impl BookingSession {
    /// Creates a session on the first step with an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selection: BookingSelection::new(),
            step: Step::DateTime,
        }
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Applies a command to this session in place.
    pub fn handle(&mut self, command: Command) {
        *self = apply(self, command);
    }

    /// Sets or clears the date. The time slot is always cleared.
    pub fn set_date(&mut self, date: Option<time::Date>) {
        self.handle(Command::SetDate(date));
    }

    /// Sets or clears the time slot without checking it against the date,
    /// court, or coach.
    pub fn set_time_slot(&mut self, slot: Option<TimeSlot>) {
        self.handle(Command::SetTimeSlot(slot));
    }

    /// Sets or clears the court.
    pub fn set_court(&mut self, court: Option<Court>) {
        self.handle(Command::SetCourt(court));
    }

    /// Adds the item, or removes it if an item with the same id is selected.
    pub fn toggle_equipment(&mut self, item: Equipment) {
        self.handle(Command::ToggleEquipment(item));
    }

    /// Sets or clears the coach.
    pub fn set_coach(&mut self, coach: Option<Coach>) {
        self.handle(Command::SetCoach(coach));
    }

    /// Sets the court to the catalog entry with this id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` wrapping `NotFound` if the catalog
    /// has no such court. The session is unchanged in that case.
    pub fn select_court_by_id(
        &mut self,
        catalog: &Catalog,
        court_id: &str,
    ) -> Result<(), CoreError> {
        let court: Court = catalog.court(court_id)?.clone();
        self.set_court(Some(court));
        Ok(())
    }

    /// Toggles the catalog equipment item with this id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` wrapping `NotFound` if the catalog
    /// has no such item. The session is unchanged in that case.
    pub fn toggle_equipment_by_id(
        &mut self,
        catalog: &Catalog,
        equipment_id: &str,
    ) -> Result<(), CoreError> {
        let item: Equipment = catalog.equipment_item(equipment_id)?.clone();
        self.toggle_equipment(item);
        Ok(())
    }

    /// Sets the coach to the catalog entry with this id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` wrapping `NotFound` if the catalog
    /// has no such coach. The session is unchanged in that case.
    pub fn select_coach_by_id(
        &mut self,
        catalog: &Catalog,
        coach_id: &str,
    ) -> Result<(), CoreError> {
        let coach: Coach = catalog.coach(coach_id)?.clone();
        self.set_coach(Some(coach));
        Ok(())
    }

    pub fn next_step(&mut self) {
        self.handle(Command::NextStep);
    }

    pub fn prev_step(&mut self) {
        self.handle(Command::PrevStep);
    }

    /// Jumps to a step regardless of what has been selected.
    pub fn go_to_step(&mut self, step: Step) {
        self.handle(Command::GoToStep(step));
    }

    /// Jumps to a step given by its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidStep` if `number` is not between 1 and 5.
    /// The session is unchanged in that case.
    pub fn go_to_step_number(&mut self, number: u8) -> Result<(), CoreError> {
        let step: Step = Step::from_number(number).ok_or(CoreError::InvalidStep(number))?;
        self.go_to_step(step);
        Ok(())
    }

    /// Restores the empty selection and the first step.
    pub fn reset_booking(&mut self) {
        self.handle(Command::Reset);
    }

    /// Returns the first field the current step still needs, if any.
    ///
    /// - Date & Time needs a date and a time slot
    /// - Select Court needs a court
    /// - Equipment and Coach are optional
    #[must_use]
    pub const fn missing_requirement(&self) -> Option<Requirement> {
        match self.step {
            Step::DateTime => {
                if self.selection.date.is_none() {
                    Some(Requirement::Date)
                } else if self.selection.time_slot.is_none() {
                    Some(Requirement::TimeSlot)
                } else {
                    None
                }
            }
            Step::Court => {
                if self.selection.court.is_none() {
                    Some(Requirement::Court)
                } else {
                    None
                }
            }
            Step::Equipment | Step::Coach | Step::Confirm => None,
        }
    }

    /// Checks whether the current step's requirements are met.
    ///
    /// This gate is for the presentation layer; `next_step` itself does
    /// not consult it.
    #[must_use]
    pub const fn can_proceed(&self) -> bool {
        self.missing_requirement().is_none()
    }

    /// Prices the current selection against a list of rules.
    #[must_use]
    pub fn price(&self, rules: &[PricingRule]) -> PriceBreakdown {
        calculate_price(&self.selection, rules)
    }

    /// Prices the current selection against a catalog's pricing rules.
    #[must_use]
    pub fn quote(&self, catalog: &Catalog) -> PriceBreakdown {
        self.price(catalog.pricing_rules())
    }
}

/// The display state of one wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStatus {
    pub step: Step,
    pub title: &'static str,
    /// Whether this is the step the session is on.
    pub is_current: bool,
    /// Whether the session has moved past this step.
    pub is_complete: bool,
}

/// Lists every step with its status for a step indicator.
#[must_use]
pub fn step_overview(session: &BookingSession) -> Vec<StepStatus> {
    let current: Step = session.step();
    Step::ALL
        .iter()
        .map(|step| StepStatus {
            step: *step,
            title: step.title(),
            is_current: *step == current,
            is_complete: *step < current,
        })
        .collect()
}
