//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction.
//! These types determine which keybindings are active, how character input is
//! processed, and which overlay (search box, filter picker) is visible.
//!
//! # State Machine
//!
//! The application operates in one of three primary input modes:
//! - **Normal**: Default navigation and command mode
//! - **Search**: Active free-text search with typing or result navigation focus
//! - **Picker**: A filter dropdown (region, capacity, date) is open
//!
//! The slide-out drawer is orthogonal to the input mode: it is a boolean on the
//! application state and, while open, captures only dismissal keys.

/// Focus state within search mode.
///
/// Determines whether search input is being typed or filtered results are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts j/k for movement and / to return to Typing.
    Navigating,
}

/// Which filter dropdown is currently open.
///
/// Mirrors the three dropdown buttons on the filter bar. Each picker offers its
/// closed option set plus the "unselected" sentinel as the first entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    /// Region dropdown (지역).
    Region,

    /// Capacity dropdown (인원).
    Capacity,

    /// Date dropdown (날짜).
    Date,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and visible overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is typing
    /// or navigating results.
    Search(SearchFocus),

    /// A filter dropdown is open.
    ///
    /// Contains the [`PickerKind`] identifying which dropdown. Navigation keys
    /// move within the dropdown; enter confirms, escape dismisses.
    Picker(PickerKind),
}
