//! Domain layer for the zspaces plugin.
//!
//! This module contains the core domain types and business logic for the plugin,
//! independent of Zellij-specific APIs or infrastructure concerns: listing and
//! notice records, the filter state, and the pure filter engine.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Listing and notice record models
//! - [`filter`]: Filter state, filter vocabulary enums, and the filter engine

pub mod error;
pub mod filter;
pub mod listing;

pub use error::{Result, SpacesError};
pub use filter::{
    filter_listings, match_ranges, CapacityBucket, CategoryTab, DateBucket, District, FilterState,
};
pub use listing::{Listing, Notice, PriceUnit};
