//! Notice page component renderer.

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeItem;

/// Renders the notice list starting at the specified row.
///
/// Each notice takes three lines: a dated title, the body, and a spacer.
///
/// ```text
/// 2025.09.22  추석 연휴 고객센터 운영 안내
///             연휴 기간(10/3~10/9) 동안 1:1 문의 답변이 지연될 수 있습니다.
/// ```
///
/// # Returns
///
/// The next available row position
pub fn render_notices(row: usize, items: &[NoticeItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    for item in items {
        position_cursor(current_row, 1);
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!(" {}", item.date);
        print!("{}", Theme::reset());
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  {}", truncate_to_width(&item.title, cols.saturating_sub(14)));
        print!("{}", Theme::reset());

        position_cursor(current_row + 1, 1);
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("             {}", truncate_to_width(&item.body, cols.saturating_sub(14)));
        print!("{}", Theme::reset());

        current_row += 3;
    }

    current_row
}
