// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display-ready price summaries.
//!
//! A quote is the price breakdown plus the line items a price summary panel
//! shows. Amounts are formatted with two decimals, and surcharge lines carry
//! an explicit sign.

use courtside::BookingSession;
use courtside_domain::{Catalog, Court, PriceBreakdown};
use serde::{Deserialize, Serialize};

/// One line of a price summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub label: String,
    /// Formatted amount, e.g. `$30.00` or `+$6.00`.
    pub amount: String,
    /// Whether this line comes from a pricing rule.
    pub is_surcharge: bool,
}

/// A priced selection ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub breakdown: PriceBreakdown,
    /// Empty until a court is selected.
    pub lines: Vec<QuoteLine>,
    /// Formatted amount the rules add to the subtotal, e.g. `+$22.50`.
    pub surcharge: String,
    /// The formatted payable total.
    pub total: String,
}

/// Formats an amount as dollars with two decimals, e.g. `$54.00`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${amount:.2}")
    }
}

/// Formats a rule adjustment with an explicit sign, e.g. `+$6.00`.
#[must_use]
pub fn format_adjustment(amount: f64) -> String {
    if amount < 0.0 {
        format_amount(amount)
    } else {
        format!("+{}", format_amount(amount))
    }
}

fn percent_label(percent: f64) -> String {
    if percent < 0.0 {
        format!("-{:.0}%", percent.abs())
    } else {
        format!("+{percent:.0}%")
    }
}

/// Prices a session's selection against the catalog's rules and lays out
/// the summary lines.
///
/// Lines are, in order: the court, equipment and coach when they cost
/// anything, then one line per applied rule in catalog order.
#[must_use]
pub fn build_quote(session: &BookingSession, catalog: &Catalog) -> PriceQuote {
    let breakdown: PriceBreakdown = session.quote(catalog);
    let mut lines: Vec<QuoteLine> = Vec::new();

    if let Some(court) = session.selection().court.as_ref() {
        lines.push(court_line(court, breakdown.court_price));

        if breakdown.equipment_price > 0.0 {
            lines.push(QuoteLine {
                label: String::from("Equipment"),
                amount: format_amount(breakdown.equipment_price),
                is_surcharge: false,
            });
        }
        if breakdown.coach_price > 0.0 {
            lines.push(QuoteLine {
                label: String::from("Coach"),
                amount: format_amount(breakdown.coach_price),
                is_surcharge: false,
            });
        }

        lines.extend(breakdown.applied_rules.iter().map(|applied| QuoteLine {
            label: format!(
                "{} ({})",
                applied.rule.name,
                percent_label(applied.rule.surcharge_percent())
            ),
            amount: format_adjustment(applied.amount),
            is_surcharge: true,
        }));
    }

    let surcharge: String = format_adjustment(breakdown.surcharge());
    let total: String = format_amount(breakdown.total);
    PriceQuote {
        breakdown,
        lines,
        surcharge,
        total,
    }
}

fn court_line(court: &Court, court_price: f64) -> QuoteLine {
    QuoteLine {
        label: format!("Court ({})", court.name),
        amount: format_amount(court_price),
        is_surcharge: false,
    }
}
