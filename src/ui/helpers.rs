//! Shared rendering utilities.
//!
//! Cursor positioning, column-width aware padding and truncation, and match
//! highlighting. Widths are terminal columns, so CJK and emoji count double;
//! highlight ranges are character indices.

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the screen and homes the cursor.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Terminal columns taken by `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` to at most `max_width` columns, ending with `…` when cut.
///
/// # Examples
///
/// ```
/// use lekutao_hub::ui::helpers::truncate_to_width;
///
/// assert_eq!(truncate_to_width("售后服务", 8), "售后服务");
/// assert_eq!(truncate_to_width("售后服务", 6), "售后…");
/// assert_eq!(truncate_to_width("abc", 0), "");
/// ```
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Spaces needed to pad `text` to `width` columns.
#[must_use]
pub fn padding_for(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(display_width(text)))
}

/// Prints `text` with the given character ranges highlighted.
///
/// Selected rows are printed plain so the selection background stays intact.
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping.
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
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        if start > current_pos {
            print!("{}", chars[current_pos..start].iter().collect::<String>());
        }

        print!(
            "{}{}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            chars[start..end].iter().collect::<String>(),
            Theme::reset()
        );
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        print!("{}", chars[current_pos..].iter().collect::<String>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_counts_double() {
        assert_eq!(display_width("ZOZO"), 4);
        assert_eq!(display_width("煤炉"), 4);
        assert_eq!(padding_for("煤炉", 6), "  ");
    }

    #[test]
    fn truncation_never_splits_wide_chars() {
        assert_eq!(truncate_to_width("煤炉拍卖", 5), "煤炉…");
        assert!(display_width(&truncate_to_width("メルカリ MERCARI", 9)) <= 9);
    }
}
