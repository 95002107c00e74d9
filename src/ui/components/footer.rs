//! Footer component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the dimmed command hints, centered and cut to the terminal width.
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push_centered(&footer.keybindings, cols);
    frame.push(Theme::reset());
    row + 1
}
