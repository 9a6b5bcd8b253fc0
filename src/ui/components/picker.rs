//! Filter dropdown (picker) overlay renderer.
//!
//! Renders the open filter dropdown as a bordered box anchored under the filter
//! bar, mirroring the site's dropdown panels. The first entry is always the
//! sentinel, which unselects the filter.

use crate::ui::helpers::{display_width, pad_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PickerInfo;

/// Left margin of the dropdown box.
const PICKER_COL: usize = 2;

/// Minimum inner width of the dropdown box.
const MIN_INNER_WIDTH: usize = 14;

/// Renders the picker dropdown anchored at the specified row.
///
/// ```text
/// ┌─ 지역 ─────────┐
/// │  지역          │
/// │▸ 강남구        │
/// │  서초구        │
/// └────────────────┘
/// ```
///
/// The highlighted entry uses the selection colors; the sentinel entry is
/// dimmed when not highlighted.
pub fn render_picker(row: usize, picker: &PickerInfo, theme: &Theme) {
    let inner_width = picker
        .items
        .iter()
        .map(|item| display_width(item) + 3)
        .max()
        .unwrap_or(0)
        .max(MIN_INNER_WIDTH);

    // Top border carrying the dropdown title.
    position_cursor(row, PICKER_COL);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    let title_segment = format!("─ {} ", picker.title);
    let title_width = display_width(&title_segment);
    print!(
        "┌{}{}┐",
        title_segment,
        "─".repeat(inner_width.saturating_sub(title_width))
    );
    print!("{}", Theme::reset());

    for (idx, item) in picker.items.iter().enumerate() {
        position_cursor(row + 1 + idx, PICKER_COL);
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("│");

        let is_highlighted = idx == picker.selected_index;
        let is_sentinel = idx == 0;

        if is_highlighted {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print!("{}", pad_to_width(&format!("▸ {item}"), inner_width));
        } else {
            if is_sentinel {
                print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
            } else {
                print!("{}", Theme::fg(&theme.colors.text_normal));
            }
            print!("{}", pad_to_width(&format!("  {item}"), inner_width));
        }

        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("│");
        print!("{}", Theme::reset());
    }

    position_cursor(row + 1 + picker.items.len(), PICKER_COL);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
