// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod config;
mod confirm;
mod error;
mod history;
mod quote;
mod store;

#[cfg(test)]
mod tests;

pub use catalog::load_catalog;
pub use config::BookingConfig;
pub use confirm::{cancel_booking, complete_booking, confirm_booking, generate_booking_id};
pub use error::ApiError;
pub use history::{BookingHistoryEntry, booking_history};
pub use quote::{PriceQuote, QuoteLine, build_quote, format_adjustment, format_amount};
pub use store::{BookingStore, InMemoryBookingStore, StoreError};
