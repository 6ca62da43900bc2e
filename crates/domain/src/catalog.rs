// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only catalog of courts, equipment, coaches, and pricing rules.
//!
//! The catalog is built once from a validated snapshot. Each table keeps the
//! snapshot's order and an id index, so lookups by id are explicit and a
//! missing id is a `DomainError::NotFound` rather than a silent miss.

use crate::error::DomainError;
use crate::pricing_rule::PricingRule;
use crate::types::{Coach, Court, Equipment, EquipmentType};
use crate::validation::{validate_coach, validate_court, validate_equipment, validate_pricing_rule};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Behavior shared by every kind of catalog entry.
pub trait CatalogEntry {
    /// The entry kind used in error messages.
    const KIND: &'static str;

    /// Returns the entry identifier.
    fn id(&self) -> &str;

    /// Returns whether the entry is eligible for new selections.
    fn is_active(&self) -> bool;

    /// Validates the entry's field constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is malformed.
    fn validate(&self) -> Result<(), DomainError>;
}

impl CatalogEntry for Court {
    const KIND: &'static str = "court";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_court(self)
    }
}

impl CatalogEntry for Equipment {
    const KIND: &'static str = "equipment";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_equipment(self)
    }
}

impl CatalogEntry for Coach {
    const KIND: &'static str = "coach";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_coach(self)
    }
}

impl CatalogEntry for PricingRule {
    const KIND: &'static str = "pricing rule";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_pricing_rule(self)
    }
}

/// An ordered table of catalog entries with a unique id index.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTable<T> {
    entries: Vec<T>,
    index: BTreeMap<String, usize>,
}

impl<T: CatalogEntry> CatalogTable<T> {
    /// Builds a table, validating every entry and rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry is invalid or an id appears twice.
    pub fn new(entries: Vec<T>) -> Result<Self, DomainError> {
        let mut index: BTreeMap<String, usize> = BTreeMap::new();
        for (position, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if index.insert(entry.id().to_string(), position).is_some() {
                return Err(DomainError::DuplicateId {
                    kind: T::KIND,
                    id: entry.id().to_string(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    /// Looks up an entry by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no entry has this id.
    pub fn get(&self, id: &str) -> Result<&T, DomainError> {
        self.index
            .get(id)
            .and_then(|position| self.entries.get(*position))
            .ok_or_else(|| DomainError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })
    }

    /// Returns every entry in catalog order.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.entries
    }

    /// Returns the active entries in catalog order.
    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter(|e| e.is_active())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The raw, unvalidated catalog as handed over by the catalog provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub courts: Vec<Court>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
    #[serde(default)]
    pub pricing_rules: Vec<PricingRule>,
}

/// A validated, read-only catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    courts: CatalogTable<Court>,
    equipment: CatalogTable<Equipment>,
    coaches: CatalogTable<Coach>,
    pricing_rules: CatalogTable<PricingRule>,
}

impl Catalog {
    /// Builds a catalog from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry fails validation or any table has a
    /// duplicate id.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, DomainError> {
        Ok(Self {
            courts: CatalogTable::new(snapshot.courts)?,
            equipment: CatalogTable::new(snapshot.equipment)?,
            coaches: CatalogTable::new(snapshot.coaches)?,
            pricing_rules: CatalogTable::new(snapshot.pricing_rules)?,
        })
    }

    /// Looks up a court by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the court does not exist.
    pub fn court(&self, id: &str) -> Result<&Court, DomainError> {
        self.courts.get(id)
    }

    /// Looks up an equipment item by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the item does not exist.
    pub fn equipment_item(&self, id: &str) -> Result<&Equipment, DomainError> {
        self.equipment.get(id)
    }

    /// Looks up a coach by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the coach does not exist.
    pub fn coach(&self, id: &str) -> Result<&Coach, DomainError> {
        self.coaches.get(id)
    }

    /// Looks up a pricing rule by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the rule does not exist.
    pub fn pricing_rule(&self, id: &str) -> Result<&PricingRule, DomainError> {
        self.pricing_rules.get(id)
    }

    #[must_use]
    pub const fn courts(&self) -> &CatalogTable<Court> {
        &self.courts
    }

    #[must_use]
    pub const fn equipment(&self) -> &CatalogTable<Equipment> {
        &self.equipment
    }

    #[must_use]
    pub const fn coaches(&self) -> &CatalogTable<Coach> {
        &self.coaches
    }

    /// Returns every pricing rule in catalog order, active or not.
    #[must_use]
    pub fn pricing_rules(&self) -> &[PricingRule] {
        self.pricing_rules.all()
    }

    #[must_use]
    pub fn active_courts(&self) -> Vec<&Court> {
        self.courts.active().collect()
    }

    #[must_use]
    pub fn active_equipment(&self) -> Vec<&Equipment> {
        self.equipment.active().collect()
    }

    /// Returns the active equipment of one type, e.g. all rackets.
    #[must_use]
    pub fn active_equipment_of_type(&self, equipment_type: EquipmentType) -> Vec<&Equipment> {
        self.equipment
            .active()
            .filter(|e| e.equipment_type == equipment_type)
            .collect()
    }

    #[must_use]
    pub fn active_coaches(&self) -> Vec<&Coach> {
        self.coaches.active().collect()
    }

    /// Returns the active pricing rules in catalog order.
    #[must_use]
    pub fn active_pricing_rules(&self) -> Vec<&PricingRule> {
        self.pricing_rules.active().collect()
    }
}
