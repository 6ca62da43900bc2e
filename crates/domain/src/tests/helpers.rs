// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingSelection, ClockTime, Coach, CoachAvailability, Court, CourtType, Equipment,
    EquipmentType, PricingRule, RuleKind, TimeSlot,
};
use std::collections::BTreeSet;
use time::Date;
use time::macros::date;

/// Tuesday.
pub const WEEKDAY: Date = date!(2026 - 03 - 03);
/// Saturday.
pub const SATURDAY: Date = date!(2026 - 03 - 07);
/// Sunday.
pub const SUNDAY: Date = date!(2026 - 03 - 08);

pub fn assert_amount(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn clock(value: &str) -> ClockTime {
    value.parse().unwrap()
}

pub fn slot_at(hour: u8) -> TimeSlot {
    TimeSlot::new(
        ClockTime::from_hour(hour).unwrap(),
        ClockTime::from_hour(hour + 1).unwrap(),
    )
}

pub fn create_indoor_court() -> Court {
    Court {
        id: String::from("court-1"),
        name: String::from("Center Court"),
        court_type: CourtType::Indoor,
        base_price: 30.0,
        is_active: true,
        description: Some(String::from("Climate controlled")),
    }
}

pub fn create_outdoor_court() -> Court {
    Court {
        id: String::from("court-2"),
        name: String::from("Garden Court"),
        court_type: CourtType::Outdoor,
        base_price: 20.0,
        is_active: true,
        description: None,
    }
}

pub fn create_racket() -> Equipment {
    Equipment {
        id: String::from("eq-racket"),
        name: String::from("Pro Racket"),
        equipment_type: EquipmentType::Racket,
        quantity: 10,
        available_quantity: 4,
        price_per_hour: 5.0,
        is_active: true,
    }
}

pub fn create_shoes() -> Equipment {
    Equipment {
        id: String::from("eq-shoes"),
        name: String::from("Court Shoes"),
        equipment_type: EquipmentType::Shoes,
        quantity: 6,
        available_quantity: 0,
        price_per_hour: 3.0,
        is_active: true,
    }
}

pub fn create_coach() -> Coach {
    Coach {
        id: String::from("coach-1"),
        name: String::from("Maria Santos"),
        specialization: String::from("Singles technique"),
        price_per_hour: 40.0,
        rating: 4.8,
        image_url: None,
        availability: vec![
            CoachAvailability {
                day_of_week: 2,
                start_time: clock("17:00"),
                end_time: clock("21:00"),
            },
            CoachAvailability {
                day_of_week: 6,
                start_time: clock("10:00"),
                end_time: clock("20:00"),
            },
        ],
        is_active: true,
    }
}

pub fn create_indoor_rule() -> PricingRule {
    PricingRule {
        id: String::from("rule-indoor"),
        name: String::from("Indoor Premium"),
        multiplier: 1.2,
        is_active: true,
        kind: RuleKind::IndoorPremium {
            court_type: CourtType::Indoor,
        },
    }
}

pub fn create_peak_rule() -> PricingRule {
    PricingRule {
        id: String::from("rule-peak"),
        name: String::from("Peak Hours"),
        multiplier: 1.5,
        is_active: true,
        kind: RuleKind::PeakHours {
            start_time: Some(clock("18:00")),
            end_time: Some(clock("21:00")),
        },
    }
}

pub fn create_weekend_rule() -> PricingRule {
    PricingRule {
        id: String::from("rule-weekend"),
        name: String::from("Weekend Rate"),
        multiplier: 1.25,
        is_active: true,
        kind: RuleKind::Weekend {
            days_of_week: BTreeSet::from([0, 6]),
        },
    }
}

pub fn create_standard_rules() -> Vec<PricingRule> {
    vec![
        create_indoor_rule(),
        create_peak_rule(),
        create_weekend_rule(),
    ]
}

pub fn create_selection(date: Date, hour: u8, court: Court) -> BookingSelection {
    BookingSelection {
        date: Some(date),
        time_slot: Some(slot_at(hour)),
        court: Some(court),
        equipment: Vec::new(),
        coach: None,
    }
}
