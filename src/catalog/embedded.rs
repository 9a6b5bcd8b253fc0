//! Embedded sample catalog.
//!
//! This module provides [`EmbeddedCatalog`], a [`CatalogSource`] backed by JSON
//! data compiled into the plugin binary. It stands in for the listing backend
//! until one exists; the records match the shape a fetched collection would
//! have.
//!
//! Validation happens on load, not on construction, so a malformed data file
//! surfaces as a worker error rather than a panic during plugin startup.

use crate::catalog::source::CatalogSource;
use crate::domain::error::{Result, SpacesError};
use crate::domain::listing::{Listing, Notice};
use std::collections::HashSet;

/// Sample listing records compiled into the binary.
const LISTINGS_JSON: &str = include_str!("../../data/listings.json");

/// Sample notice records compiled into the binary.
const NOTICES_JSON: &str = include_str!("../../data/notices.json");

/// Catalog source backed by embedded JSON sample data.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    /// Creates the embedded catalog source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks the record invariants the rest of the plugin relies on.
    ///
    /// Every listing must carry at least one image, and ids must be unique
    /// within the catalog. Prices are non-negative by construction (`u32`).
    fn validate(listings: &[Listing]) -> Result<()> {
        let mut seen_ids = HashSet::new();

        for listing in listings {
            if listing.images.is_empty() {
                return Err(SpacesError::Catalog(format!(
                    "listing {} has no images",
                    listing.id
                )));
            }
            if !seen_ids.insert(listing.id.as_str()) {
                return Err(SpacesError::Catalog(format!(
                    "duplicate listing id: {}",
                    listing.id
                )));
            }
        }

        Ok(())
    }
}

impl CatalogSource for EmbeddedCatalog {
    fn load_listings(&self) -> Result<Vec<Listing>> {
        let _span = tracing::debug_span!("load_embedded_listings").entered();

        let listings: Vec<Listing> = serde_json::from_str(LISTINGS_JSON)
            .map_err(|e| SpacesError::Catalog(format!("failed to parse listing data: {e}")))?;

        Self::validate(&listings)?;

        tracing::debug!(listing_count = listings.len(), "embedded listings loaded");
        Ok(listings)
    }

    fn load_notices(&self) -> Result<Vec<Notice>> {
        let _span = tracing::debug_span!("load_embedded_notices").entered();

        let notices: Vec<Notice> = serde_json::from_str(NOTICES_JSON)
            .map_err(|e| SpacesError::Catalog(format!("failed to parse notice data: {e}")))?;

        tracing::debug!(notice_count = notices.len(), "embedded notices loaded");
        Ok(notices)
    }
}

/// Returns the embedded sample listings, in catalog order.
///
/// Convenience for tests and the library API; panics are impossible because the
/// embedded data is validated by the test suite.
///
/// # Errors
///
/// Returns an error if the embedded data is malformed (only possible if the
/// data file shipped with the plugin is edited by hand).
pub fn sample_catalog() -> Result<Vec<Listing>> {
    EmbeddedCatalog::new().load_listings()
}

#[cfg(test)]
pub(crate) fn sample_listings() -> Vec<Listing> {
    sample_catalog().expect("embedded sample data is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::PriceUnit;

    #[test]
    fn embedded_listings_parse_and_validate() {
        let listings = EmbeddedCatalog::new().load_listings().unwrap();

        assert_eq!(listings.len(), 5);
        assert_eq!(listings[0].id, "1");
        assert_eq!(listings[4].id, "5");
    }

    #[test]
    fn sample_records_hold_the_catalog_invariants() {
        let listings = sample_listings();

        let mut ids = HashSet::new();
        for listing in &listings {
            assert!(!listing.images.is_empty(), "listing {} images", listing.id);
            assert!(ids.insert(listing.id.clone()), "listing {} id", listing.id);
        }

        // The sample set is entirely hourly-priced.
        assert!(listings.iter().all(|l| l.unit == PriceUnit::Hour));
    }

    #[test]
    fn sample_districts_come_from_the_region_filter_set() {
        use crate::domain::filter::District;

        for listing in sample_listings() {
            assert!(
                District::from_label(&listing.district).is_some(),
                "unknown district: {}",
                listing.district
            );
        }
    }

    #[test]
    fn validate_rejects_missing_images() {
        let mut listings = sample_listings();
        listings[2].images.clear();

        assert!(matches!(
            EmbeddedCatalog::validate(&listings),
            Err(SpacesError::Catalog(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut listings = sample_listings();
        listings[1].id = "1".to_string();

        assert!(matches!(
            EmbeddedCatalog::validate(&listings),
            Err(SpacesError::Catalog(_))
        ));
    }

    #[test]
    fn embedded_notices_parse_newest_first() {
        let notices = EmbeddedCatalog::new().load_notices().unwrap();

        assert!(!notices.is_empty());
        assert!(notices.windows(2).all(|w| w[0].posted_at >= w[1].posted_at));
    }
}
