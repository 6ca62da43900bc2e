// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingSession, Step};
use courtside_domain::{
    Catalog, CatalogSnapshot, ClockTime, Coach, CoachAvailability, Court, CourtType, Equipment,
    EquipmentType, PricingRule, RuleKind, TimeSlot,
};
use std::collections::BTreeSet;
use time::Date;
use time::macros::date;

/// Saturday.
pub const SATURDAY: Date = date!(2026 - 03 - 07);
/// Tuesday.
pub const TUESDAY: Date = date!(2026 - 03 - 03);

pub fn assert_amount(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn create_test_slot(hour: u8) -> TimeSlot {
    TimeSlot::new(
        ClockTime::from_hour(hour).unwrap(),
        ClockTime::from_hour(hour + 1).unwrap(),
    )
}

pub fn create_test_court() -> Court {
    Court {
        id: String::from("court-1"),
        name: String::from("Center Court"),
        court_type: CourtType::Indoor,
        base_price: 30.0,
        is_active: true,
        description: None,
    }
}

pub fn create_test_equipment(id: &str, price_per_hour: f64) -> Equipment {
    Equipment {
        id: id.to_string(),
        name: format!("Item {id}"),
        equipment_type: EquipmentType::Racket,
        quantity: 5,
        available_quantity: 5,
        price_per_hour,
        is_active: true,
    }
}

pub fn create_test_coach() -> Coach {
    Coach {
        id: String::from("coach-1"),
        name: String::from("Maria Santos"),
        specialization: String::from("Doubles strategy"),
        price_per_hour: 40.0,
        rating: 4.9,
        image_url: None,
        availability: vec![CoachAvailability {
            day_of_week: 6,
            start_time: "10:00".parse().unwrap(),
            end_time: "20:00".parse().unwrap(),
        }],
        is_active: true,
    }
}

pub fn create_test_rules() -> Vec<PricingRule> {
    vec![
        PricingRule {
            id: String::from("rule-indoor"),
            name: String::from("Indoor Premium"),
            multiplier: 1.2,
            is_active: true,
            kind: RuleKind::IndoorPremium {
                court_type: CourtType::Indoor,
            },
        },
        PricingRule {
            id: String::from("rule-peak"),
            name: String::from("Peak Hours"),
            multiplier: 1.5,
            is_active: true,
            kind: RuleKind::PeakHours {
                start_time: Some("18:00".parse().unwrap()),
                end_time: Some("21:00".parse().unwrap()),
            },
        },
        PricingRule {
            id: String::from("rule-weekend"),
            name: String::from("Weekend Rate"),
            multiplier: 1.25,
            is_active: true,
            kind: RuleKind::Weekend {
                days_of_week: BTreeSet::from([0, 6]),
            },
        },
    ]
}

/// A session with every field chosen, sitting on the confirm step.
pub fn create_complete_session() -> BookingSession {
    let mut session: BookingSession = BookingSession::new();
    session.set_date(Some(SATURDAY));
    session.set_time_slot(Some(create_test_slot(19)));
    session.set_court(Some(create_test_court()));
    session.toggle_equipment(create_test_equipment("eq-1", 5.0));
    session.set_coach(Some(create_test_coach()));
    session.go_to_step(Step::Confirm);
    session
}

/// A catalog holding the test court, two equipment items, the coach and the rules.
pub fn create_test_catalog() -> Catalog {
    Catalog::from_snapshot(CatalogSnapshot {
        courts: vec![create_test_court()],
        equipment: vec![
            create_test_equipment("eq-1", 5.0),
            create_test_equipment("eq-2", 3.0),
        ],
        coaches: vec![create_test_coach()],
        pricing_rules: create_test_rules(),
    })
    .unwrap()
}
