//! Composable UI component renderers.
//!
//! Each component draws one part of the screen into a [`Frame`] starting at a
//! given row and returns the next free row.
//!
//! # Layout
//!
//! ```text
//! [notification banner or blank]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Filter groups + sort selector]
//! [Border]
//! [Table Headers]
//! [Table Rows | Empty state]
//! [Pagination]
//! ...
//! [Border]
//! [Footer]
//! ```
//!
//! An open overlay is drawn last, over everything between the search bar and
//! the footer border.

mod empty;
mod filters;
mod footer;
mod header;
mod modal;
mod notification;
mod pagination;
mod search;
mod table;

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filters::render_filter_bar;
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use notification::render_notification;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Rows a full screen needs; smaller terminals are clipped at the bottom.
pub const MIN_ROWS: usize = 24;

fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.push(&Theme::fg(color));
    frame.push(&"─".repeat(cols));
    frame.push(Theme::reset());
    row + 1
}

/// Renders the whole page for `vm` into `frame`.
pub fn render_page(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let rows = rows.max(MIN_ROWS);

    if let Some(notification) = &vm.notification {
        render_notification(frame, notification, theme, cols);
    }

    let mut current_row = 2;
    current_row = render_header(frame, current_row, &vm.header, theme, cols);
    current_row = render_border(frame, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(frame, current_row, &vm.search_bar, theme, cols);
    let overlay_top = current_row;
    current_row = render_filter_bar(frame, current_row, &vm.filter_groups, &vm.sort_options, theme, cols);
    current_row = render_border(frame, current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(frame, current_row, empty, theme, cols);
    } else {
        current_row = render_table_headers(frame, current_row, theme, cols);
        current_row = render_table_rows(frame, current_row, &vm.display_items, theme, cols);
        render_pagination(frame, current_row + 1, &vm.pagination, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    render_border(frame, border_row, &theme.colors.border, cols);
    render_footer(frame, footer_row, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(frame, overlay_top, border_row.saturating_sub(1), modal, theme, cols);
    }
}
