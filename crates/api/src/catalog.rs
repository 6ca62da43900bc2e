// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use courtside_domain::{Catalog, CatalogSnapshot};
use tracing::debug;

/// Parses a JSON catalog snapshot and validates it into a `Catalog`.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, an entry is invalid, or a
/// table has a duplicate id.
pub fn load_catalog(json: &str) -> Result<Catalog, ApiError> {
    let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
    let catalog: Catalog = Catalog::from_snapshot(snapshot)?;

    debug!(
        courts = catalog.courts().len(),
        equipment = catalog.equipment().len(),
        coaches = catalog.coaches().len(),
        pricing_rules = catalog.pricing_rules().len(),
        "Loaded catalog snapshot"
    );

    Ok(catalog)
}
