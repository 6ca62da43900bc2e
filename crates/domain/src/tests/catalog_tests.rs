// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_coach, create_indoor_court, create_outdoor_court, create_peak_rule, create_racket,
    create_shoes, create_standard_rules,
};
use crate::{
    Catalog, CatalogSnapshot, Court, DomainError, Equipment, EquipmentType, PricingRule, RuleKind,
};

fn create_test_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        courts: vec![create_indoor_court(), create_outdoor_court()],
        equipment: vec![create_racket(), create_shoes()],
        coaches: vec![create_coach()],
        pricing_rules: create_standard_rules(),
    }
}

#[test]
fn test_catalog_lookup_by_id() {
    let catalog: Catalog = Catalog::from_snapshot(create_test_snapshot()).unwrap();

    assert_eq!(catalog.court("court-2").unwrap().name, "Garden Court");
    assert_eq!(catalog.equipment_item("eq-shoes").unwrap().price_per_hour, 3.0);
    assert_eq!(catalog.coach("coach-1").unwrap().name, "Maria Santos");
    assert_eq!(catalog.pricing_rule("rule-peak").unwrap().multiplier, 1.5);
}

#[test]
fn test_catalog_lookup_miss_is_not_found() {
    let catalog: Catalog = Catalog::from_snapshot(create_test_snapshot()).unwrap();

    let result: Result<&Court, DomainError> = catalog.court("court-99");

    assert_eq!(
        result,
        Err(DomainError::NotFound {
            kind: "court",
            id: String::from("court-99"),
        })
    );
}

#[test]
fn test_catalog_rejects_duplicate_ids() {
    let mut snapshot: CatalogSnapshot = create_test_snapshot();
    snapshot.courts.push(create_indoor_court());

    let result: Result<Catalog, DomainError> = Catalog::from_snapshot(snapshot);

    assert!(matches!(
        result,
        Err(DomainError::DuplicateId { kind: "court", .. })
    ));
}

#[test]
fn test_catalog_rejects_invalid_entry() {
    let mut snapshot: CatalogSnapshot = create_test_snapshot();
    snapshot.equipment[0].available_quantity = 11;

    let result: Result<Catalog, DomainError> = Catalog::from_snapshot(snapshot);

    assert!(matches!(
        result,
        Err(DomainError::AvailableExceedsQuantity { .. })
    ));
}

#[test]
fn test_catalog_rejects_unbounded_peak_rule() {
    let mut snapshot: CatalogSnapshot = create_test_snapshot();
    snapshot.pricing_rules.push(PricingRule {
        id: String::from("rule-open"),
        kind: RuleKind::PeakHours {
            start_time: None,
            end_time: None,
        },
        ..create_peak_rule()
    });

    let result: Result<Catalog, DomainError> = Catalog::from_snapshot(snapshot);

    assert!(matches!(result, Err(DomainError::UnboundedPeakHours { .. })));
}

#[test]
fn test_active_filters_preserve_catalog_order() {
    let mut snapshot: CatalogSnapshot = create_test_snapshot();
    snapshot.courts[0].is_active = false;
    snapshot.pricing_rules[1].is_active = false;

    let catalog: Catalog = Catalog::from_snapshot(snapshot).unwrap();

    let courts: Vec<&str> = catalog.active_courts().iter().map(|c| c.id.as_str()).collect();
    let rules: Vec<&str> = catalog
        .active_pricing_rules()
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(courts, vec!["court-2"]);
    assert_eq!(rules, vec!["rule-indoor", "rule-weekend"]);
    assert_eq!(catalog.pricing_rules().len(), 3);
}

#[test]
fn test_inactive_entries_remain_addressable_by_id() {
    let mut snapshot: CatalogSnapshot = create_test_snapshot();
    snapshot.courts[0].is_active = false;

    let catalog: Catalog = Catalog::from_snapshot(snapshot).unwrap();

    assert!(catalog.court("court-1").is_ok());
}

#[test]
fn test_active_equipment_of_type() {
    let catalog: Catalog = Catalog::from_snapshot(create_test_snapshot()).unwrap();

    let rackets: Vec<&Equipment> = catalog.active_equipment_of_type(EquipmentType::Racket);
    let other: Vec<&Equipment> = catalog.active_equipment_of_type(EquipmentType::Other);

    assert_eq!(rackets.len(), 1);
    assert_eq!(rackets[0].id, "eq-racket");
    assert!(other.is_empty());
    assert_eq!(catalog.active_equipment().len(), 2);
    assert_eq!(catalog.active_coaches().len(), 1);
}

#[test]
fn test_snapshot_deserializes_from_json() {
    let json: &str = r#"{
        "courts": [
            { "id": "court-1", "name": "Center Court", "type": "indoor",
              "basePrice": 30, "isActive": true }
        ],
        "equipment": [
            { "id": "eq-racket", "name": "Pro Racket", "type": "racket",
              "quantity": 10, "availableQuantity": 4, "pricePerHour": 5, "isActive": true }
        ],
        "coaches": [
            { "id": "coach-1", "name": "Maria Santos", "specialization": "Singles",
              "pricePerHour": 40, "rating": 4.8, "isActive": true,
              "availability": [ { "dayOfWeek": 2, "startTime": "17:00", "endTime": "21:00" } ] }
        ],
        "pricingRules": [
            { "id": "rule-weekend", "name": "Weekend Rate", "multiplier": 1.25,
              "isActive": true, "type": "weekend", "conditions": { "daysOfWeek": [0, 6] } },
            { "id": "rule-custom", "name": "Holiday", "multiplier": 2,
              "isActive": false, "type": "custom" }
        ]
    }"#;

    let snapshot: CatalogSnapshot = serde_json::from_str(json).unwrap();
    let catalog: Catalog = Catalog::from_snapshot(snapshot).unwrap();

    assert_eq!(catalog.courts().len(), 1);
    assert_eq!(catalog.coach("coach-1").unwrap().availability.len(), 1);
    assert_eq!(catalog.pricing_rules()[1].kind, RuleKind::Custom);
    assert_eq!(catalog.active_pricing_rules().len(), 1);
}
