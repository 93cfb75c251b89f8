//! Article and platform pages.

use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Renders the chip line and the visible body lines.
///
/// `last_row` is the last row the page may use; a "more" marker takes it when
/// lines continue below the window.
pub fn render_detail(row: usize, last_row: usize, detail: &DetailView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("  ");
    let mut used = 2;
    for chip in &detail.chips {
        let text = format!("[{chip}] ");
        let width = display_width(&text);
        if used + width > cols {
            break;
        }
        print!("{}{text}", Theme::fg(&theme.colors.tag_fg));
        used += width;
    }
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for line in &detail.lines {
        if current_row > last_row {
            break;
        }
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  {}", truncate_to_width(line, cols.saturating_sub(4)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if detail.has_more {
        position_cursor(last_row.max(row + 1), 1);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  ↓ 更多内容");
        print!("{}", Theme::reset());
    }

    current_row
}
