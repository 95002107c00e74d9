//! Filter bar and sort selector renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterGroupView, SortOption};

const LABEL_WIDTH: usize = 12;

/// Renders one line per filter group followed by the sort selector.
///
/// Active options (`aria-pressed="true"`) use the selection colors.
pub fn render_filter_bar(
    frame: &mut Frame,
    row: usize,
    groups: &[FilterGroupView],
    sort_options: &[SortOption],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;

    for group in groups {
        let options = group
            .options
            .iter()
            .map(|o| (o.label.as_str(), o.is_active));
        current_row = render_option_line(frame, current_row, &group.label, options, theme, cols);
    }

    let sorts = sort_options.iter().map(|o| (o.label.as_str(), o.is_selected));
    render_option_line(frame, current_row, "Ordenar", sorts, theme, cols)
}

fn render_option_line<'a>(
    frame: &mut Frame,
    row: usize,
    label: &str,
    options: impl Iterator<Item = (&'a str, bool)>,
    theme: &Theme,
    cols: usize,
) -> usize {
    frame.position_cursor(row, 1);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push_padded(&format!(" {label}:"), LABEL_WIDTH);

    let mut used = LABEL_WIDTH;
    for (text, active) in options {
        let chip = format!(" {text} ");
        let width = chip.chars().count() + 1;
        if used + width > cols {
            break;
        }
        if active {
            frame.push(Theme::bold());
            frame.push(&Theme::fg(&theme.colors.selection_fg));
            frame.push(&Theme::bg(&theme.colors.selection_bg));
        } else {
            frame.push(&Theme::fg(&theme.colors.text_normal));
        }
        frame.push(&chip);
        frame.push(Theme::reset());
        frame.push(" ");
        used += width;
    }

    frame.spaces(cols.saturating_sub(used));
    frame.push(Theme::reset());
    row + 1
}
