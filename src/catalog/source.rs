//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where
//! listing and notice data comes from. Today the only implementation is the
//! embedded sample catalog; a future backend replaces it with a fetched
//! collection conforming to the same record shapes, and nothing above this
//! seam (filter engine included) has to change.

use crate::domain::error::Result;
use crate::domain::listing::{Listing, Notice};

/// Abstraction over catalog data providers.
///
/// Implementations return fully validated records: every listing has at least
/// one image and a unique id, so consumers never re-check the invariants.
///
/// # Implementations
///
/// - [`EmbeddedCatalog`](crate::catalog::EmbeddedCatalog): parses the sample
///   data compiled into the plugin (default)
pub trait CatalogSource: Send {
    /// Loads all listings in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or violates a
    /// record invariant.
    fn load_listings(&self) -> Result<Vec<Listing>>;

    /// Loads all notices, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or parsed.
    fn load_notices(&self) -> Result<Vec<Notice>>;
}
