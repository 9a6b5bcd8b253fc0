//! Catalog layer providing listing and notice data.
//!
//! This module abstracts where catalog data comes from. The plugin ships with
//! an embedded sample catalog; the [`CatalogSource`] trait is the seam where a
//! real listing backend would plug in without touching the filter engine or UI.
//!
//! # Modules
//!
//! - `source`: Catalog source trait abstraction
//! - `embedded`: JSON sample data compiled into the binary

pub mod embedded;
pub mod source;

pub use embedded::{sample_catalog, EmbeddedCatalog};
pub use source::CatalogSource;

#[cfg(test)]
pub(crate) use embedded::sample_listings;
