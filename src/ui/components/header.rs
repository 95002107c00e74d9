//! Header component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title with the result count, e.g. ` Vagas (14) `.
///
/// Returns the next available row.
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {} ({}) ", header.title, header.result_count);

    frame.position_cursor(row, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.push(&Theme::bg(bg));
    }
    frame.push_centered(&title, cols);
    frame.push(Theme::reset());
    row + 1
}
