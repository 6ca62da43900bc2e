// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Price computation for a booking selection.
//!
//! ## Invariants
//!
//! - Pricing is pure and total: it never fails and never mutates its inputs
//! - Without a court the breakdown is all zero
//! - Rules only ever adjust the court price; equipment and coach prices are
//!   passed through unchanged
//! - Applicable rules compound multiplicatively on the court price
//! - Each applied rule reports its surcharge against the unadjusted court
//!   price, in catalog order
//! - `subtotal` ignores rules; `total` is the payable amount

use crate::pricing_rule::PricingRule;
use crate::selection::BookingSelection;
use serde::{Deserialize, Serialize};

/// A pricing rule that applied to a selection, with its displayed surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedRule {
    /// The rule that applied.
    pub rule: PricingRule,
    /// `court_price * (multiplier - 1)`, computed against the unadjusted court price.
    pub amount: f64,
}

/// The itemized result of pricing a selection.
///
/// Derived on demand and never cached across selection changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub court_price: f64,
    pub equipment_price: f64,
    pub coach_price: f64,
    /// Applied rules in catalog order.
    pub applied_rules: Vec<AppliedRule>,
    /// Sum of the unadjusted components.
    pub subtotal: f64,
    /// Sum of the rule-adjusted court price, equipment, and coach.
    pub total: f64,
}

impl PriceBreakdown {
    /// Creates an all-zero breakdown.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            court_price: 0.0,
            equipment_price: 0.0,
            coach_price: 0.0,
            applied_rules: Vec::new(),
            subtotal: 0.0,
            total: 0.0,
        }
    }

    /// Returns the amount added to the subtotal by compounded rules.
    #[must_use]
    pub fn surcharge(&self) -> f64 {
        self.total - self.subtotal
    }
}

impl Default for PriceBreakdown {
    fn default() -> Self {
        Self::zero()
    }
}

/// Computes the price breakdown for a selection.
///
/// Inactive rules in `rules` are skipped. The order of `rules` determines the
/// order of `applied_rules` but not the total.
///
/// # Example
///
/// ```text
/// indoor court, base 30.00, Saturday 19:00
/// rules: indoor premium x1.2, peak hours 18-21 x1.5, weekend x1.25
///
/// applied: +6.00, +15.00, +7.50 (each against the base)
/// subtotal = 30.00
/// total    = 30.00 * 1.2 * 1.5 * 1.25 = 67.50
/// ```
#[must_use]
pub fn calculate_price(selection: &BookingSelection, rules: &[PricingRule]) -> PriceBreakdown {
    let Some(court) = selection.court.as_ref() else {
        return PriceBreakdown::zero();
    };

    let court_price: f64 = court.base_price;
    let equipment_price: f64 = selection.equipment.iter().map(|e| e.price_per_hour).sum();
    let coach_price: f64 = selection.coach.as_ref().map_or(0.0, |c| c.price_per_hour);

    let mut court_multiplier: f64 = 1.0;
    let mut applied_rules: Vec<AppliedRule> = Vec::new();

    for rule in rules.iter().filter(|r| r.is_active) {
        if !rule.applies_to(selection) {
            continue;
        }
        court_multiplier *= rule.multiplier;
        applied_rules.push(AppliedRule {
            rule: rule.clone(),
            amount: court_price * (rule.multiplier - 1.0),
        });
    }

    let adjusted_court_price: f64 = court_price * court_multiplier;

    PriceBreakdown {
        court_price,
        equipment_price,
        coach_price,
        applied_rules,
        subtotal: court_price + equipment_price + coach_price,
        total: adjusted_court_price + equipment_price + coach_price,
    }
}
