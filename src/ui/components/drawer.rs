//! Slide-out drawer (side menu) overlay renderer.
//!
//! Renders the navigation drawer as a left-anchored panel covering the full
//! pane height. The drawer is purely informational chrome: account banner,
//! icon shortcuts, navigation links, and the corporate credit line. Escape or
//! the menu key dismisses it.

use crate::ui::helpers::{pad_to_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DrawerInfo;

/// Drawer panel width in terminal cells (content, excluding the edge line).
const DRAWER_WIDTH: usize = 32;

/// Paints one drawer row: content padded to the panel width plus the edge.
fn render_drawer_line(row: usize, content: &str, theme: &Theme) {
    position_cursor(row, 1);
    print!("{}", pad_to_width(&truncate_to_width(content, DRAWER_WIDTH), DRAWER_WIDTH));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.border));
    print!("│");
    print!("{}", Theme::reset());
}

/// Renders the slide-out drawer over the left edge of the pane.
///
/// Layout, top to bottom: account banner (accent), separator, shortcut
/// entries, section heading (accent), link entries, then blank rows down to
/// the credit line on the last row. Every row is painted so the page content
/// underneath is fully covered.
pub fn render_drawer(drawer: &DrawerInfo, theme: &Theme, rows: usize) {
    let mut current_row = 1;

    // Account banner.
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.drawer_accent_fg));
    render_drawer_line(current_row, &format!(" {}", drawer.account), theme);
    current_row += 1;

    print!("{}", Theme::fg(&theme.colors.border));
    render_drawer_line(current_row, &"─".repeat(DRAWER_WIDTH), theme);
    current_row += 1;

    for shortcut in &drawer.shortcuts {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        render_drawer_line(current_row, &format!("  · {shortcut}"), theme);
        current_row += 1;
    }

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.drawer_accent_fg));
    render_drawer_line(current_row, &format!(" {}", drawer.section), theme);
    current_row += 1;

    for link in &drawer.links {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        render_drawer_line(current_row, &format!("  {link}"), theme);
        current_row += 1;
    }

    // Cover the remaining rows so the page does not bleed through.
    let credit_row = rows.max(current_row + 1);
    while current_row < credit_row.saturating_sub(1) {
        render_drawer_line(current_row, "", theme);
        current_row += 1;
    }

    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_drawer_line(current_row, &format!(" {}", drawer.powered_by), theme);
}
