//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! worker responses, translating them into state changes and action sequences.
//! It is the single writer of the filter state: every mutation happens
//! synchronously here, on the interaction thread, in response to one discrete
//! event.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. A render flag and actions are returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextTab`, `PrevTab`
//! - **Input**: `Char`, `Backspace`, `Confirm`, `Escape`
//! - **Mode switching**: `SearchMode`, `FocusSearchBar`, `ExitSearch`,
//!   `OpenPicker`, `ToggleMenu`
//! - **Routing**: `ShowListings`, `ShowNotices`
//! - **System**: `PermissionsResult`, `WorkerResponse`

use crate::app::modes::{InputMode, PickerKind, SearchFocus};
use crate::app::router::{Leaf, Route};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input, system changes, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes and
/// action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the card or picker selection down by one (wraps).
    KeyDown,
    /// Moves the card or picker selection up by one (wraps).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Activates the next category tab (wraps).
    NextTab,
    /// Activates the previous category tab (wraps).
    PrevTab,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Confirms the current context: applies a picker choice, or moves search
    /// focus from typing to the result list.
    Confirm,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Dismisses the topmost overlay: drawer, then picker, then search.
    Escape,
    /// Opens a filter dropdown.
    OpenPicker(PickerKind),
    /// Toggles the slide-out drawer.
    ToggleMenu,
    /// Switches to the listing browse route.
    ShowListings,
    /// Switches to the notice route.
    ShowNotices,

    /// Reports granted Zellij permissions after a permission request.
    ///
    /// Currently unused but reserved for future permission-dependent features.
    PermissionsResult {
        /// Permissions granted by the user.
        granted: Vec<PermissionType>,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A `(should_render, actions)` pair. `should_render` is `false` when the event
/// was ignored or caused no observable change, so the runtime can skip a frame.
///
/// # Errors
///
/// Returns errors from state mutation methods. No current transition fails, but
/// the signature keeps the runtime's error path exercised.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if matches!(state.input_mode, InputMode::Picker(_)) {
                state.move_picker_down();
            } else {
                state.move_selection_down();
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if matches!(state.input_mode, InputMode::Picker(_)) {
                state.move_picker_up();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::NextTab => {
            state.filters.tab = state.filters.tab.next();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::PrevTab => {
            state.filters.tab = state.filters.tab.prev();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.filters.query = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::Confirm => match state.input_mode {
            InputMode::Picker(kind) => {
                let needs_refilter = state.commit_picker(kind);
                state.input_mode = InputMode::Normal;

                tracing::debug!(
                    picker = ?kind,
                    needs_refilter = needs_refilter,
                    "picker choice applied"
                );

                if needs_refilter {
                    state.apply_filters();
                }
                Ok((true, vec![]))
            }
            InputMode::Search(SearchFocus::Typing) => {
                if state.filters.query.is_empty() {
                    state.input_mode = InputMode::Normal;
                } else {
                    state.input_mode = InputMode::Search(SearchFocus::Navigating);
                }
                Ok((true, vec![]))
            }
            InputMode::Search(SearchFocus::Navigating) | InputMode::Normal => Ok((false, vec![])),
        },
        Event::ExitSearch => {
            tracing::debug!(query = %state.filters.query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.filters.query = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.filters.query.push(*c);
            tracing::trace!(query = %state.filters.query, "search query updated");
            state.apply_filters();

            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.filters.query.pop();
            state.apply_filters();

            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.menu_open {
                state.menu_open = false;
                return Ok((true, vec![]));
            }

            match state.input_mode {
                InputMode::Picker(_) => {
                    state.input_mode = InputMode::Normal;
                    Ok((true, vec![]))
                }
                InputMode::Search(_) => {
                    state.input_mode = InputMode::Normal;
                    state.filters.query = String::new();
                    state.apply_filters();
                    Ok((true, vec![]))
                }
                InputMode::Normal => Ok((false, vec![])),
            }
        }
        Event::OpenPicker(kind) => {
            if state.input_mode != InputMode::Normal || state.menu_open {
                return Ok((false, vec![]));
            }
            state.open_picker(*kind);
            Ok((true, vec![]))
        }
        Event::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Ok((true, vec![]))
        }
        Event::ShowListings => {
            state.route = Route::Listings;
            Ok((true, vec![]))
        }
        Event::ShowNotices => {
            state.route = Route::Notice;

            // Re-request the leaf if it never arrived; the page shows its
            // placeholder until the response lands.
            let actions = if state.notices.is_pending() {
                vec![Action::PostToWorker(WorkerMessage::load_notices())]
            } else {
                vec![]
            };
            Ok((true, actions))
        }
        Event::PermissionsResult { granted: _ } => Ok((false, vec![])),
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Applies a worker response to the route leaves.
fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::CatalogLoaded { listings } => {
            if state.catalog.ready() == Some(listings) {
                tracing::debug!("catalog unchanged, skipping render");
                return Ok((false, vec![]));
            }

            tracing::debug!(listing_count = listings.len(), "catalog leaf ready");
            state.catalog = Leaf::Ready(listings.clone());
            state.apply_filters();
            Ok((true, vec![]))
        }
        WorkerResponse::NoticesLoaded { notices } => {
            if state.notices.ready() == Some(notices) {
                tracing::debug!("notices unchanged, skipping render");
                return Ok((false, vec![]));
            }

            tracing::debug!(notice_count = notices.len(), "notice leaf ready");
            state.notices = Leaf::Ready(notices.clone());
            Ok((state.route == Route::Notice, vec![]))
        }
        WorkerResponse::Error { message } => {
            // The affected leaf stays pending; the page keeps its placeholder.
            tracing::error!("worker error: {message}");
            Ok((false, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_listings;
    use crate::domain::filter::{CategoryTab, District};
    use crate::ui::theme::Theme;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        let (_, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogLoaded {
                listings: sample_listings(),
            }),
        )
        .unwrap();
        state
    }

    fn press_chars(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn catalog_response_populates_the_leaf_and_filters() {
        let state = loaded_state();

        assert!(!state.catalog.is_pending());
        assert_eq!(state.filtered_listings.len(), 5);
    }

    #[test]
    fn duplicate_catalog_response_skips_render() {
        let mut state = loaded_state();

        let (should_render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogLoaded {
                listings: sample_listings(),
            }),
        )
        .unwrap();

        assert!(!should_render);
        assert!(actions.is_empty());
    }

    #[test]
    fn worker_error_keeps_the_leaf_pending() {
        let mut state = AppState::new(Theme::default());

        let (should_render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "load catalog: boom".to_string(),
            }),
        )
        .unwrap();

        assert!(!should_render);
        assert!(state.catalog.is_pending());
    }

    #[test]
    fn typing_in_search_mode_narrows_results() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        press_chars(&mut state, "이벤트");

        assert_eq!(state.filtered_listings.len(), 1);
        assert_eq!(state.filtered_listings[0].id, "2");
    }

    #[test]
    fn characters_outside_search_mode_are_ignored() {
        let mut state = loaded_state();

        let (should_render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();

        assert!(!should_render);
        assert_eq!(state.filters.query, "");
    }

    #[test]
    fn backspace_widens_results_again() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        press_chars(&mut state, "이벤트");
        assert_eq!(state.filtered_listings.len(), 1);

        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();

        assert_eq!(state.filtered_listings.len(), 5);
    }

    #[test]
    fn exit_search_clears_the_query() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        press_chars(&mut state, "강남");
        handle_event(&mut state, &Event::ExitSearch).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filters.query, "");
        assert_eq!(state.filtered_listings.len(), 5);
    }

    #[test]
    fn confirm_moves_search_focus_to_results() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        press_chars(&mut state, "강남");
        handle_event(&mut state, &Event::Confirm).unwrap();

        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Navigating)
        );
    }

    #[test]
    fn confirm_with_empty_query_leaves_search() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Confirm).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn tab_cycling_refilters() {
        let mut state = loaded_state();

        // Best → All → Hourly
        handle_event(&mut state, &Event::NextTab).unwrap();
        handle_event(&mut state, &Event::NextTab).unwrap();
        assert_eq!(state.filters.tab, CategoryTab::Hourly);
        assert_eq!(state.filtered_listings.len(), 5);

        // Hourly → Package: the sample set has no package-priced listings.
        handle_event(&mut state, &Event::NextTab).unwrap();
        assert_eq!(state.filters.tab, CategoryTab::Package);
        assert!(state.filtered_listings.is_empty());
    }

    #[test]
    fn picker_flow_selects_a_region() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::OpenPicker(PickerKind::Region)).unwrap();
        assert_eq!(state.input_mode, InputMode::Picker(PickerKind::Region));

        // sentinel → 강남구
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::Confirm).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filters.region, Some(District::Gangnam));
        assert_eq!(state.filtered_listings.len(), 2);
    }

    #[test]
    fn escape_dismisses_picker_without_committing() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::OpenPicker(PickerKind::Region)).unwrap();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filters.region, None);
        assert_eq!(state.filtered_listings.len(), 5);
    }

    #[test]
    fn inactive_filter_selection_changes_no_results() {
        let mut state = loaded_state();
        let before = state.filtered_listings.clone();

        handle_event(&mut state, &Event::OpenPicker(PickerKind::Capacity)).unwrap();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::Confirm).unwrap();

        assert!(state.filters.capacity.is_some());
        assert_eq!(state.filtered_listings, before);
    }

    #[test]
    fn drawer_toggles_and_escape_closes_it_first() {
        let mut state = loaded_state();
        assert!(!state.menu_open);

        handle_event(&mut state, &Event::ToggleMenu).unwrap();
        assert!(state.menu_open);

        // Esc closes the drawer before touching search state.
        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!state.menu_open);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn pickers_do_not_open_over_the_drawer() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::ToggleMenu).unwrap();
        let (should_render, _) =
            handle_event(&mut state, &Event::OpenPicker(PickerKind::Date)).unwrap();

        assert!(!should_render);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn notice_route_rerequests_a_pending_leaf() {
        let mut state = loaded_state();

        let (should_render, actions) = handle_event(&mut state, &Event::ShowNotices).unwrap();

        assert!(should_render);
        assert_eq!(state.route, Route::Notice);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadNotices { .. })]
        ));
    }

    #[test]
    fn close_event_emits_close_action_only() {
        let mut state = loaded_state();

        let (should_render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();

        assert!(!should_render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
