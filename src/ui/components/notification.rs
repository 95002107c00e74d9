//! Success banner renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NotificationInfo;

/// Draws the banner across the whole first row.
pub fn render_notification(frame: &mut Frame, notification: &NotificationInfo, theme: &Theme, cols: usize) {
    frame.position_cursor(1, 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.success_fg));
    frame.push(&Theme::bg(&theme.colors.success_bg));
    frame.push_centered(&format!("✔ {}", notification.message), cols);
    frame.push(Theme::reset());
}
