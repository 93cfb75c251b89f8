//! Hub list table.
//!
//! Three columns: section, label and detail. The label column is where match
//! highlighting and the "copied" badge show up.

use crate::ui::helpers::{self, display_width, padding_for, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const SECTION_COLUMN_WIDTH: usize = 6;
const LABEL_COLUMN_WIDTH: usize = 30;

/// Renders the column headers and returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  {}", column("分类", SECTION_COLUMN_WIDTH));
    print!("{}", column("名称", LABEL_COLUMN_WIDTH));
    print!("说明");
    print!("{}", Theme::reset());
    row + 1
}

pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one row, padded to the full width so the selection bar is solid.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base_fg = if item.is_selected {
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    position_cursor(row, 1);
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{}", Theme::fg(base_fg));
        print!("› ");
    } else {
        print!("{}", Theme::fg(&theme.colors.section_fg));
        print!("  ");
    }

    print!("{}", column(item.section.label(), SECTION_COLUMN_WIDTH));
    print!("{}", Theme::fg(base_fg));

    let badge_width = item.badge.as_ref().map_or(0, |b| display_width(b) + 1);
    let label_budget = LABEL_COLUMN_WIDTH.saturating_sub(badge_width + 2);
    let label = truncate_to_width(&item.label, label_budget);
    let ranges = if label == item.label {
        item.highlight_ranges.as_slice()
    } else {
        &[]
    };
    helpers::render_highlighted_text(&label, ranges, theme, item.is_selected);

    let mut used = display_width(&label);
    if let Some(badge) = &item.badge {
        print!(" {}{badge}{}", Theme::fg(&theme.colors.badge_fg), Theme::fg(base_fg));
        used += badge_width;
    }
    print!("{}", " ".repeat(LABEL_COLUMN_WIDTH.saturating_sub(used)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.detail);

    let line_width = 2 + SECTION_COLUMN_WIDTH + LABEL_COLUMN_WIDTH + display_width(&item.detail);
    print!("{}", " ".repeat(cols.saturating_sub(line_width)));

    print!("{}", Theme::reset());
    row + 1
}

fn column(text: &str, width: usize) -> String {
    format!("{text}{}", padding_for(text, width))
}
