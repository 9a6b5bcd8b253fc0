//! Search box component renderer.
//!
//! Renders the free-text search input as a 3-line bordered box. While the query
//! is empty the site's placeholder (촬영·스터디룸) is shown dimmed.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// Layout:
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ 검색: {query}    │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3, the box uses 3 lines)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");

    let prefix = " 검색: ";
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{prefix}");

    let content_width = if search.query.is_empty() {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{}", search.placeholder);
        print!("{}", Theme::reset());
        display_width(&search.placeholder)
    } else {
        print!("{}", search.query);
        display_width(&search.query)
    };

    let used = display_width(prefix) + content_width;
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
