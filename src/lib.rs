//! Zspaces: a Zellij plugin for browsing SpaceCloud rental space listings.
//!
//! Zspaces renders the SpaceCloud browse experience in a terminal pane:
//! - A header with the brand wordmark and free-text search
//! - A filter bar with region, capacity, and date dropdowns
//! - Category tabs (전체, 시간단위, 패키지, 촬영, 베스트 공간)
//! - A card list over the listing catalog, with an empty-state placeholder
//! - A slide-out navigation drawer and a notice page
//!
//! The catalog is an embedded sample today; the catalog source trait is the
//! seam where a listing backend plugs in later.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filter state holder
//! │  - Route table with deferred leaves                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Source trait│   │ - Async loads │
//! │ - Theming     │   │ - Embedded    │   │ - IPC bridge  │
//! │ - Components  │   │   sample data │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Listing/notice records, filter engine (domain/)  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model and routing
//! - [`domain`]: Core domain types (listings, notices, filter state and engine)
//! - [`catalog`]: Catalog source abstraction and embedded sample data
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background worker for asynchronous catalog loading
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zspaces.wasm" {
//!         theme "catppuccin-mocha"
//!         default_tab "전체"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Lifecycle
//!
//! 1. **Plugin load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, subscribe to Zellij events
//! 2. **Leaf loads**: post `LoadCatalog` / `LoadNotices` to the worker; pages
//!    render the `Loading ....` placeholder until responses arrive
//! 3. **Interaction**: key events mutate the filter state through the event
//!    handler; filtering re-runs only when region, tab, or query change
//! 4. **Rendering**: view models computed per frame drive the component layer

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Leaf, PickerKind, Route, SearchFocus};
pub use domain::{
    filter_listings, CategoryTab, District, FilterState, Listing, Notice, PriceUnit, Result,
    SpacesError,
};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration and
/// passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zspaces.wasm" {
///     theme "catppuccin-latte"
///     theme_file "~/.config/zellij/zspaces-theme.toml"
///     default_tab "시간단위"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file (tilde paths allowed).
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Label of the category tab active on startup.
    ///
    /// Unknown labels fall back to 베스트 공간, the site default.
    pub default_tab: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Absent keys keep their defaults; malformed
    /// values degrade rather than failing plugin load.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zspaces::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("default_tab".to_string(), "전체".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.default_tab.as_deref(), Some("전체"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            default_tab: config.get("default_tab").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - The resolved theme (custom file, built-in name, or default)
/// - The configured default tab (lenient parse, falls back to 베스트 공간)
/// - Pending route leaves (populated later by the worker)
///
/// # Example
///
/// ```rust
/// use zspaces::{initialize, CategoryTab, Config};
///
/// let config = Config {
///     default_tab: Some("시간단위".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.filters.tab, CategoryTab::Hourly);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zspaces plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme);

    if let Some(label) = &config.default_tab {
        state.filters.tab = CategoryTab::from_label(label);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_known_keys_and_ignores_the_rest() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "catppuccin-frappe".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());
        map.insert("scan_depth".to_string(), "4".to_string());

        let config = Config::from_zellij(&map);

        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.theme_file.is_none());
        assert!(config.default_tab.is_none());
    }

    #[test]
    fn initialize_resolves_the_named_theme() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }

    #[test]
    fn unknown_theme_and_tab_fall_back_to_defaults() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            default_tab: Some("no-such-tab".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);

        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert_eq!(state.filters.tab, CategoryTab::Best);
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
