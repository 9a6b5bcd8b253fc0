//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, display-width accounting for the Korean
//! catalog strings, and query match highlighting with proper ANSI escape
//! sequence management.
//!
//! # Display Width
//!
//! Hangul and CJK characters occupy two terminal cells. All padding, centering,
//! and truncation in the components goes through [`display_width`] /
//! [`truncate_to_width`] so mixed Korean/ASCII lines stay aligned.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are 1-indexed
/// (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Returns the number of terminal cells a character occupies.
///
/// Covers the ranges that actually occur in the catalog strings: Hangul jamo
/// and syllables, CJK ideographs, fullwidth forms, and the common wide symbol
/// blocks. Everything else counts as one cell.
#[must_use]
pub const fn char_width(c: char) -> usize {
    match c {
        '\u{1100}'..='\u{115F}' // Hangul jamo
        | '\u{2E80}'..='\u{303E}' // CJK radicals, punctuation
        | '\u{3041}'..='\u{33FF}' // Kana, CJK compatibility
        | '\u{3400}'..='\u{4DBF}' // CJK extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{A960}'..='\u{A97F}' // Hangul jamo extended-A
        | '\u{AC00}'..='\u{D7A3}' // Hangul syllables
        | '\u{F900}'..='\u{FAFF}' // CJK compatibility ideographs
        | '\u{FE30}'..='\u{FE4F}' // CJK compatibility forms
        | '\u{FF00}'..='\u{FF60}' // Fullwidth forms
        | '\u{FFE0}'..='\u{FFE6}' => 2,
        _ => 1,
    }
}

/// Returns the number of terminal cells a string occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Truncates a string to at most `max_width` terminal cells.
///
/// Appends an ellipsis when truncation occurs, keeping the total within the
/// budget. Never splits a wide character across the boundary.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1); // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();

    for c in text.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }

    out.push('…');
    out
}

/// Pads a string with trailing spaces to exactly `width` terminal cells.
///
/// Strings wider than `width` are returned unchanged; callers truncate first
/// when a hard limit matters.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - current))
}

/// Renders text with highlighted character ranges for query matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use match highlight colors unless the
/// item is selected, in which case selection colors take precedence.
///
/// Ranges use character indices (not byte indices), `(start, end)` with
/// exclusive end, non-overlapping and ascending, the shape produced by
/// [`crate::domain::match_ranges`].
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        // Ranges can point past the end when the title was truncated for width.
        if start >= chars.len() {
            break;
        }
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_counts_as_two_cells() {
        assert_eq!(display_width("강남구"), 6);
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("강남 cafe"), 10);
    }

    #[test]
    fn truncation_respects_cell_budget() {
        let truncated = truncate_to_width("강남루프탑_스튜디오", 9);
        assert!(display_width(&truncated) <= 9);
        assert!(truncated.ends_with('…'));

        // No truncation when the text already fits.
        assert_eq!(truncate_to_width("강남", 10), "강남");
    }

    #[test]
    fn padding_fills_to_exact_width() {
        assert_eq!(pad_to_width("강남", 8), "강남    ");
        assert_eq!(display_width(&pad_to_width("강남구", 10)), 10);
        // Overwide input is left as-is.
        assert_eq!(pad_to_width("가나다라", 3), "가나다라");
    }
}
