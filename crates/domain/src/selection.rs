// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Coach, Court, Equipment, TimeSlot};

/// The in-progress, not yet confirmed set of booking choices.
///
/// A time slot is only meaningful together with its date. Equipment is a set
/// keyed by id, kept in the order items were added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingSelection {
    pub date: Option<time::Date>,
    pub time_slot: Option<TimeSlot>,
    pub court: Option<Court>,
    pub equipment: Vec<Equipment>,
    pub coach: Option<Coach>,
}

impl BookingSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            date: None,
            time_slot: None,
            court: None,
            equipment: Vec::new(),
            coach: None,
        }
    }

    /// Checks whether an equipment item with this id is selected.
    #[must_use]
    pub fn has_equipment(&self, equipment_id: &str) -> bool {
        self.equipment.iter().any(|e| e.id == equipment_id)
    }

    /// Checks whether nothing has been selected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time_slot.is_none()
            && self.court.is_none()
            && self.equipment.is_empty()
            && self.coach.is_none()
    }
}
