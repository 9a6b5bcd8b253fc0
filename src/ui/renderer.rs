//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to the component layer.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: Delegate to [`crate::ui::components`]
//!
//! Output goes to stdout as cursor-positioned ANSI text; the Zellij runtime
//! owns the pane buffer and clears between frames.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and hands it to the shell
/// renderer. Does not clear the screen or manage cursor visibility.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_shell(&viewmodel, &state.theme, rows, cols);
}
