//! Listing card component renderer.
//!
//! Renders the visible card window as three-line cards: title with price,
//! a meta line (rating, district, tags, counters), and the representative
//! image URL. The selected card gets the full selection background across all
//! three lines.

use crate::ui::helpers::{
    self, display_width, pad_to_width, position_cursor, truncate_to_width,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Rows occupied by one rendered card.
const ROWS_PER_CARD: usize = 3;

/// Renders all cards in the visible window starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3 × card count)
pub fn render_cards(row: usize, items: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_card(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single three-line card.
///
/// ```text
/// 강남루프탑_스튜디오 겸 라운지                    최저 1,000원/시간
///   ★ 4.8 · 강남구 · 루프탑 · 촬영가능                 ♥ 131 · 조회 914
///   https://images.unsplash.com/…
/// ```
///
/// Styling precedence: selection background over the whole card, then query
/// match highlights on the title (suppressed while selected), then the normal
/// accent colors for price and tags.
fn render_card(row: usize, item: &CardItem, theme: &Theme, cols: usize) -> usize {
    let (select_prefix, base_fg) = if item.is_selected {
        (
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            ),
            theme.colors.selection_fg.clone(),
        )
    } else {
        (
            Theme::fg(&theme.colors.text_normal),
            theme.colors.text_normal.clone(),
        )
    };

    // Line 1: title left, price right.
    position_cursor(row, 1);
    print!("{select_prefix}");
    print!(" ");

    let price_width = display_width(&item.price);
    let title_budget = cols.saturating_sub(price_width + 4);
    let title = truncate_to_width(&item.title, title_budget);

    helpers::render_highlighted_text(&title, &item.highlight_ranges, theme, item.is_selected);
    if !item.is_selected && !item.highlight_ranges.is_empty() {
        // Highlighting resets styling; restore the card base color.
        print!("{}", Theme::fg(&base_fg));
    }

    let gap = cols.saturating_sub(1 + display_width(&title) + price_width + 1);
    print!("{}", " ".repeat(gap));
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{} ", item.price);
    print!("{}", Theme::reset());

    // Line 2: rating, district, tags left; counters right.
    position_cursor(row + 1, 1);
    print!("{select_prefix}");
    if !item.is_selected {
        print!("{}", Theme::dim());
    }

    let mut meta = format!("   ★ 4.8 · {}", item.district);
    for tag in &item.tags {
        meta.push_str(" · ");
        meta.push_str(tag);
    }
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.tag_fg));
    }
    let stats_width = display_width(&item.stats);
    let meta_budget = cols.saturating_sub(stats_width + 2);
    let meta = truncate_to_width(&meta, meta_budget);
    print!("{meta}");

    let gap = cols.saturating_sub(display_width(&meta) + stats_width + 1);
    print!("{}", " ".repeat(gap));
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{} ", item.stats);
    print!("{}", Theme::reset());

    // Line 3: representative image URL.
    position_cursor(row + 2, 1);
    print!("{select_prefix}");
    if !item.is_selected {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    }
    let image = truncate_to_width(&format!("   {}", item.image), cols.saturating_sub(1));
    print!("{}", pad_to_width(&image, cols));
    print!("{}", Theme::reset());

    row + ROWS_PER_CARD
}
