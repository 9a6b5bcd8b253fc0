//! Category tab bar component renderer.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabBarInfo;

/// Renders the category tab bar at the specified row.
///
/// The active tab is drawn bold in the theme accent with a `●` marker; the
/// others are dimmed. Padded to the full pane width.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_tab_bar(row: usize, bar: &TabBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");

    let mut used = 1;
    for tab in &bar.tabs {
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("● {}", tab.label);
            used += display_width(&tab.label) + 2;
        } else {
            print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
            print!("{}", tab.label);
            used += display_width(&tab.label);
        }
        print!("{}", Theme::reset());
        print!("   ");
        used += 3;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
