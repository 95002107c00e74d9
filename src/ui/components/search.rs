//! Search bar component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line bordered search box.
///
/// ```text
///   ┌──────────────────────────┐
///   │ Buscar: dados …          │
///   └──────────────────────────┘
/// ```
///
/// A trailing `…` marks text still inside the debounce window.
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    frame.position_cursor(row, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("┌{}┐", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    let pending = if search.pending { " …" } else { "" };
    let search_text = format!(" Buscar: {}{pending}", search.query);

    frame.position_cursor(row + 1, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push("│");
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push_padded(&search_text, inner_width);
    frame.push(&border);
    frame.push("│");
    frame.push(Theme::reset());

    frame.position_cursor(row + 2, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("└{}┘", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    row + 3
}
