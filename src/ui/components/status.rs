//! Notice line and domain checker result.

use crate::ui::helpers::{position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the two status lines starting at `row`.
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    if let Some(notice) = &status.notice {
        position_cursor(row, 1);
        print!("{}", Theme::fg(&theme.colors.notice_fg));
        print!("  {}", truncate_to_width(notice, cols.saturating_sub(2)));
        print!("{}", Theme::reset());
    }

    if let Some(check) = &status.domain_check {
        let color = if check.flagged {
            &theme.colors.flagged_fg
        } else {
            &theme.colors.safe_fg
        };
        let mark = if check.flagged { "⚠" } else { "✓" };
        let line = format!("{mark} {}  {}", check.input, check.message);

        position_cursor(row + 1, 1);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(color));
        print!("  {}", truncate_to_width(&line, cols.saturating_sub(2)));
        print!("{}", Theme::reset());
    }

    row + 2
}
