//! Header component renderer.
//!
//! Renders the top bar: menu hint, brand wordmark, and the active page title
//! with its result count.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar at the specified row.
///
/// Layout: `☰  SpaceCloud.  ·  프리미엄존 (5)`, left aligned, padded to the
/// full pane width. The brand uses the theme accent, the menu hint is dimmed.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", Theme::dim());
    print!(" ☰  ");
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.brand_fg));
    print!("{}", header.brand);
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  ·  {}", header.title);

    let used = 4 + display_width(&header.brand) + 5 + display_width(&header.title);
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}
