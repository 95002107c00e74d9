//! Listing table renderer.

use crate::ui::helpers::{self, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const ID_WIDTH: usize = 10;
const TAG_WIDTH: usize = 18;
const MODO_WIDTH: usize = 11;
const LOCAL_WIDTH: usize = 20;
const DATE_WIDTH: usize = 10;
const GAPS: usize = 5;

fn title_width(cols: usize) -> usize {
    cols.saturating_sub(ID_WIDTH + TAG_WIDTH + MODO_WIDTH + LOCAL_WIDTH + DATE_WIDTH + GAPS)
        .max(12)
}

/// Renders the bold column headings.
pub fn render_table_headers(frame: &mut Frame, row: usize, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    frame.push_padded(
        &format!(
            "{:<iw$} {:<tw$} {:<gw$} {:<mw$} {:<lw$} {:<dw$}",
            "ID",
            "TÍTULO",
            "TIPO",
            "MODO",
            "LOCAL",
            "DATA",
            iw = ID_WIDTH,
            tw = title_width(cols),
            gw = TAG_WIDTH,
            mw = MODO_WIDTH,
            lw = LOCAL_WIDTH,
            dw = DATE_WIDTH,
        ),
        cols,
    );
    frame.push(Theme::reset());
    row + 1
}

/// Renders one row per listing on the current page.
pub fn render_table_rows(frame: &mut Frame, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(frame, current_row, item, theme, cols);
    }
    current_row
}

fn render_table_row(frame: &mut Frame, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base = Theme::fg(&theme.colors.text_normal);
    let tw = title_width(cols);

    frame.position_cursor(row, 1);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push_padded(&item.id, ID_WIDTH);
    frame.push(" ");

    frame.push(&base);
    let title = truncate(&item.titulo, tw);
    let title_len = title.chars().count();
    let ranges: Vec<(usize, usize)> = item
        .highlight_ranges
        .iter()
        .copied()
        .filter(|&(_, end)| end <= title_len)
        .collect();
    helpers::render_highlighted_text(frame, &title, &ranges, theme, &base);
    frame.spaces(tw.saturating_sub(title_len));
    frame.push(" ");

    frame.push(&Theme::fg(&theme.colors.tag_fg));
    frame.push_padded(&item.tag, TAG_WIDTH);
    frame.push(" ");

    frame.push(&base);
    frame.push_padded(&item.modo, MODO_WIDTH);
    frame.push(" ");
    frame.push_padded(&item.localizacao, LOCAL_WIDTH);
    frame.push(" ");
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push_padded(&item.date, DATE_WIDTH);

    let line_len = ID_WIDTH + tw + TAG_WIDTH + MODO_WIDTH + LOCAL_WIDTH + DATE_WIDTH + GAPS;
    frame.spaces(cols.saturating_sub(line_len));
    frame.push(Theme::reset());
    row + 1
}
