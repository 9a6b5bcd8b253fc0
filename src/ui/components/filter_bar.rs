//! Filter bar component renderer.
//!
//! Renders the three dropdown buttons (region, capacity, date). Each button
//! shows its selected value, or its sentinel label dimmed, the same cue the
//! listing site uses for untouched dropdowns.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the filter bar at the specified row.
///
/// Layout: ` [지역 ▾]  [인원 ▾]  [날짜 ▾]` with a dimmed `필터 · 지도` hint
/// right-aligned, padded to the full pane width.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");

    let buttons = [
        (&bar.region, bar.region_selected),
        (&bar.capacity, bar.capacity_selected),
        (&bar.date, bar.date_selected),
    ];

    let mut used = 1;
    for (label, selected) in buttons {
        print!("{}", Theme::fg(&theme.colors.border));
        print!("[");
        if selected {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        } else {
            print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" ▾");
        print!("{}", Theme::fg(&theme.colors.border));
        print!("]");
        print!("{}", Theme::reset());
        print!("  ");

        used += display_width(label) + 6;
    }

    let hint = "필터 · 지도";
    let hint_width = display_width(hint);
    let padding = cols.saturating_sub(used + hint_width + 1);
    print!("{}", " ".repeat(padding));
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("{hint} ");
    print!("{}", Theme::reset());

    row + 1
}
