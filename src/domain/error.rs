//! Error types for the zspaces plugin.
//!
//! This module defines the centralized error type [`SpacesError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for zspaces plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from catalog validation to I/O failures and configuration issues.
/// I/O errors convert automatically via `#[from]`; the remaining variants carry
/// a human-readable description of what went wrong.
#[derive(Debug, Error)]
pub enum SpacesError {
    /// Catalog data failed to parse or violated a record invariant.
    ///
    /// Raised by the catalog source when the embedded listing or notice data
    /// cannot be deserialized, contains a duplicate listing id, or contains a
    /// listing without images.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the plugin cannot communicate with its background worker
    /// thread, typically during catalog loading. The string contains details
    /// about the communication failure.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zspaces operations.
///
/// This is a type alias for `std::result::Result<T, SpacesError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, SpacesError>;
