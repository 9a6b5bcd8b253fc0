//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the zspaces library
//! and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `CustomMessage`,
//!    `PermissionRequestResult` events
//! 3. **Leaf loads**: Post `LoadCatalog` / `LoadNotices` to the worker once
//!    permissions settle; pages show their placeholder until responses arrive
//! 4. **Update**: Translate Zellij events to library events, delegate to
//!    `handle_event`, execute returned actions
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! In normal mode:
//! - `j`/`k` or arrows: Move selection
//! - `Tab` / `Shift+Tab`: Next / previous category tab
//! - `/`: Enter search mode
//! - `r` / `p` / `d`: Open region / capacity / date dropdown
//! - `m`: Toggle the side menu
//! - `n`: Notice page, `b`: back to listings
//! - `q`: Close the plugin pane
//! - `Esc`: Dismiss drawer or picker
//!
//! While typing in search mode, printable keys go into the query; `Enter`
//! moves focus to the results and `Esc` leaves search.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use zspaces::worker::{WorkerMessage, WorkerResponse, ZspacesWorker};
use zspaces::{handle_event, Action, Config, Event, InputMode, PickerKind, SearchFocus};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(ZspacesWorker, zspaces_worker, ZSPACES_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication.
struct State {
    /// Core application state from the library layer.
    app: zspaces::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zspaces::initialize(&default_config),
            worker_name: "zspaces".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes application state, requests
    /// permissions, and subscribes to events. The initial leaf loads are
    /// posted once the permission result arrives.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zspaces::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.app = zspaces::initialize(&config);
        tracing::debug!(default_tab = self.app.filters.tab.label(), "app state initialized");

        request_permission(&[PermissionType::ReadApplicationState]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI by delegating to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zspaces::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a short event name for span labelling.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Whether printable keys currently feed the search query.
    fn is_typing(&self) -> bool {
        self.app.input_mode == InputMode::Search(SearchFocus::Typing)
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let normal = self.app.input_mode == InputMode::Normal;

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if !self.is_typing() => Event::KeyDown,
            BareKey::Char('k') if !self.is_typing() => Event::KeyUp,
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevTab,
            BareKey::Tab => Event::NextTab,
            BareKey::Esc => {
                if !self.app.menu_open && matches!(self.app.input_mode, InputMode::Search(_)) {
                    Event::ExitSearch
                } else {
                    Event::Escape
                }
            }
            BareKey::Char('q') if normal => Event::CloseFocus,
            BareKey::Enter => Event::Confirm,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
                InputMode::Picker(_) => return None,
            },
            BareKey::Char('r') if normal => Event::OpenPicker(PickerKind::Region),
            BareKey::Char('p') if normal => Event::OpenPicker(PickerKind::Capacity),
            BareKey::Char('d') if normal => Event::OpenPicker(PickerKind::Date),
            BareKey::Char('m') if normal => Event::ToggleMenu,
            BareKey::Char('n') if normal => Event::ShowNotices,
            BareKey::Char('b') if normal => Event::ShowListings,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// The initial leaf loads are posted here so the worker is guaranteed to
    /// be up regardless of how the permission dialog resolves.
    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - requesting leaf loads");
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - continuing with embedded catalog");
            }
        }

        self.post_worker_message(&WorkerMessage::load_catalog());
        self.post_worker_message(&WorkerMessage::load_notices());
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    /// Serialization errors are logged but not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
        }
    }
}
