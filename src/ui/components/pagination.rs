//! Pagination controls renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders `◀ ant   Página X de Y   prox ▶`; disabled arrows are dimmed.
///
/// Draws nothing when the controls are hidden and returns `row` unchanged.
pub fn render_pagination(frame: &mut Frame, row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    if !info.visible {
        return row;
    }

    let prev = "◀ ant";
    let next = "prox ▶";
    let label = format!("   Página {} de {}   ", info.current_page, info.total_pages);
    let width = prev.chars().count() + label.chars().count() + next.chars().count();
    let left = cols.saturating_sub(width) / 2;

    frame.position_cursor(row, 1);
    frame.spaces(left);
    push_control(frame, prev, info.prev_enabled, theme);
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push(&label);
    push_control(frame, next, info.next_enabled, theme);
    frame.spaces(cols.saturating_sub(left + width));
    frame.push(Theme::reset());
    row + 1
}

fn push_control(frame: &mut Frame, text: &str, enabled: bool, theme: &Theme) {
    if enabled {
        frame.push(Theme::bold());
        frame.push(&Theme::fg(&theme.colors.search_bar_border));
    } else {
        frame.push(Theme::dim());
        frame.push(&Theme::fg(&theme.colors.text_dim));
    }
    frame.push(text);
    frame.push(Theme::reset());
}
