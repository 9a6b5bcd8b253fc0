//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or worker
//! responses. Actions bridge pure state transformations and effectful
//! operations like hiding the pane or communicating with the background worker.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit (pressing 'q').
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Requests a route leaf load without blocking the main event loop.
    PostToWorker(WorkerMessage),
}
