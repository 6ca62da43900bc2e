// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::state::BookingSession;
use crate::step::Step;
use courtside_domain::BookingSelection;
use tracing::debug;

/// Applies a command to a session, producing the next session.
///
/// Transitions never fail. Step navigation saturates at the first and last
/// steps, and no selection field is validated here.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// The session after the command.
#[must_use]
pub fn apply(session: &BookingSession, command: Command) -> BookingSession {
    let name: &'static str = command.name();
    let mut selection: BookingSelection = session.selection.clone();
    let mut step: Step = session.step;

    match command {
        Command::SetDate(date) => {
            // A slot belongs to its date
            selection.date = date;
            selection.time_slot = None;
        }
        Command::SetTimeSlot(slot) => {
            selection.time_slot = slot;
        }
        Command::SetCourt(court) => {
            selection.court = court;
        }
        Command::ToggleEquipment(item) => {
            if selection.has_equipment(&item.id) {
                selection.equipment.retain(|e| e.id != item.id);
            } else {
                selection.equipment.push(item);
            }
        }
        Command::SetCoach(coach) => {
            selection.coach = coach;
        }
        Command::NextStep => {
            step = step.next();
        }
        Command::PrevStep => {
            step = step.prev();
        }
        Command::GoToStep(target) => {
            step = target;
        }
        Command::Reset => {
            selection = BookingSelection::new();
            step = Step::DateTime;
        }
    }

    debug!(
        command = name,
        step = step.number(),
        equipment_count = selection.equipment.len(),
        "Applied booking command"
    );

    BookingSession { selection, step }
}
