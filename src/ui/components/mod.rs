//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Search input box
//! - [`table`]: Hub list with section, name and detail columns
//! - [`detail`]: Article and platform pages
//! - [`empty`]: Message shown when nothing matches
//! - [`status`]: Notice and domain checker lines
//! - [`footer`]: Key hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, list page in search mode only]
//! [Table Headers | Chips]
//! [Rows | Body lines]
//! [Notice]
//! [Domain check]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageView, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::render_status;
use table::{render_table_headers, render_table_rows};

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame of `rows` x `cols`.
pub fn render_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let status_row = border_row.saturating_sub(2);

    match &vm.page {
        PageView::List {
            items,
            empty_state: Some(empty),
            ..
        } if items.is_empty() => {
            render_empty_state(current_row, empty, theme, cols);
        }
        PageView::List { items, .. } => {
            current_row = render_table_headers(current_row, theme);
            render_table_rows(current_row, items, theme, cols);
        }
        PageView::Detail(detail) => {
            render_detail(current_row, status_row.saturating_sub(1), detail, theme, cols);
        }
    }

    render_status(status_row, &vm.status, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
