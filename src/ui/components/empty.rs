//! Empty state component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line "no results" message centered at `row`.
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row + 1, 1);
    frame.push(&Theme::fg(&theme.colors.empty_state_fg));
    frame.push_centered(&empty.message, cols);
    frame.push(Theme::reset());

    frame.position_cursor(row + 2, 1);
    frame.push(Theme::dim());
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push_centered(&empty.subtitle, cols);
    frame.push(Theme::reset());

    row + 4
}
