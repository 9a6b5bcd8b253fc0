//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the listing shell,
//! following a component-based architecture. Each component renders one part of
//! the interface and returns the next available row, so layouts compose by
//! threading the row position through.
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header: ☰ SpaceCloud. · page title]
//! [Border]
//! [Filter bar: 지역 / 인원 / 날짜]
//! [Tab bar: 전체 시간단위 패키지 촬영 베스트 공간]
//! [Border]
//! [Search box - 3 lines, search mode only]
//! [Page body: cards | empty | loading | notices]
//! [Border]
//! [Footer]
//! ```
//!
//! Overlays (picker dropdown, slide-out drawer) are painted last so they sit on
//! top of the page content.

mod cards;
mod drawer;
mod empty;
mod filter_bar;
mod footer;
mod header;
mod notice;
mod picker;
mod search;
mod tabs;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageView, UiViewModel};

use cards::render_cards;
use drawer::render_drawer;
use empty::{render_empty_state, render_loading};
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use notice::render_notices;
use picker::render_picker;
use search::render_search_bar;
use tabs::render_tab_bar;

/// Row where the page body starts in normal mode (below the shell chrome).
const BODY_START_ROW: usize = 7;

/// Row where overlays (picker dropdown) are anchored.
const OVERLAY_ROW: usize = 7;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/filter bar, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame of the shell from a view model.
///
/// Draws the chrome, the active page body, the footer, and finally any open
/// overlays. The bottom two rows are reserved for the border and footer
/// regardless of body height, matching the fixed chrome accounting in the view
/// model's windowing.
pub fn render_shell(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Row 1 stays blank.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_tab_bar(current_row, &vm.tab_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    debug_assert_eq!(current_row, BODY_START_ROW);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    match &vm.page {
        PageView::Loading { message } => {
            render_loading(current_row, message, theme, cols);
        }
        PageView::Cards { items, .. } => {
            render_cards(current_row, items, theme, cols);
        }
        PageView::Empty(empty) => {
            render_empty_state(current_row, empty, theme, cols);
        }
        PageView::Notices { items } => {
            render_notices(current_row, items, theme, cols);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(picker) = &vm.picker {
        render_picker(OVERLAY_ROW, picker, theme);
    }

    if let Some(drawer) = &vm.drawer {
        render_drawer(drawer, theme, rows);
    }
}
