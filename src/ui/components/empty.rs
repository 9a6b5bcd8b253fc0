//! Empty state and loading placeholder renderers.
//!
//! Two structural page states share this module: the empty result placeholder
//! (a rendering contract, not an error: shown when the filter conjunction
//! matches nothing) and the loading placeholder shown while a route leaf is
//! pending.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Vertical offset of the placeholder message below the body start.
const MESSAGE_OFFSET: usize = 3;

/// Prints a horizontally centered line at the given row.
fn render_centered(row: usize, text: &str, cols: usize) {
    let width = display_width(text);
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
}

/// Renders the empty-result placeholder.
///
/// Shown when filtering matched no listings: a centered two-line message in
/// place of the card grid (조건에 맞는 공간이 없습니다.).
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    render_centered(row + MESSAGE_OFFSET, &empty.message, cols);
    print!("{}", Theme::reset());

    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(row + MESSAGE_OFFSET + 1, &empty.subtitle, cols);
    print!("{}", Theme::reset());
}

/// Renders the pending-leaf placeholder (`Loading ....`).
pub fn render_loading(row: usize, message: &str, theme: &Theme, cols: usize) {
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.empty_state_fg));
    render_centered(row + MESSAGE_OFFSET, message, cols);
    print!("{}", Theme::reset());
}
