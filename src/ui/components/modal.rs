//! Overlay renderer for the detail view and the application form.
//!
//! The overlay is a bordered box drawn over the listing area. Content that
//! does not fit the box height is cut at the bottom.

use crate::ui::helpers::{wrap, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ApplicationView, ModalView};
use crate::app::modal::DetailView;

const SIDE_MARGIN: usize = 4;

/// A styled line of overlay content.
struct Line {
    style: String,
    text: String,
}

impl Line {
    fn new(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(String::new(), String::new())
    }
}

/// Draws `modal` in the box spanning rows `top..=bottom`.
pub fn render_modal(frame: &mut Frame, top: usize, bottom: usize, modal: &ModalView, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(SIDE_MARGIN * 2).max(20);
    let inner = width.saturating_sub(4);

    let lines = match modal {
        ModalView::Detail(view) => detail_lines(view, theme, inner),
        ModalView::Application(view) => application_lines(view, theme, inner),
    };

    draw_box(frame, top, bottom, width, &lines, theme);
}

fn detail_lines(view: &DetailView, theme: &Theme, inner: usize) -> Vec<Line> {
    let normal = Theme::fg(&theme.colors.text_normal);
    let dim = Theme::fg(&theme.colors.text_dim);

    let mut lines = vec![
        Line::new(Theme::fg(&theme.colors.tag_fg), format!("[{}]", view.tag)),
        Line::new(format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)), view.titulo.clone()),
        Line::new(dim.clone(), format!("Local: {}", view.localizacao)),
        Line::blank(),
    ];
    lines.extend(wrap(&view.descricao, inner).into_iter().map(|l| Line::new(normal.clone(), l)));

    for (heading, items) in [("Requisitos", &view.requisitos), ("Benefícios", &view.beneficios)] {
        lines.push(Line::blank());
        lines.push(Line::new(Theme::bold().to_string(), format!("{heading}:")));
        for item in items {
            for (i, part) in wrap(item, inner.saturating_sub(2)).into_iter().enumerate() {
                let bullet = if i == 0 { "• " } else { "  " };
                lines.push(Line::new(normal.clone(), format!("{bullet}{part}")));
            }
        }
    }

    lines.push(Line::blank());
    lines.push(Line::new(dim, "[candidatar]  [fechar]"));
    lines
}

fn application_lines(view: &ApplicationView, theme: &Theme, inner: usize) -> Vec<Line> {
    let normal = Theme::fg(&theme.colors.text_normal);
    let error = Theme::fg(&theme.colors.error_fg);

    let mut lines = vec![
        Line::new(format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)), "Candidatura"),
        Line::new(Theme::fg(&theme.colors.tag_fg), view.vaga_title.clone()),
        Line::blank(),
    ];

    for field in &view.fields {
        let marker = if field.required { " *" } else { "" };
        let style = if field.invalid { error.clone() } else { normal.clone() };
        lines.push(Line::new(style, format!("{}{marker}: {}", field.label, field.value)));
        if let Some(message) = &field.error {
            for part in wrap(message, inner.saturating_sub(2)) {
                lines.push(Line::new(error.clone(), format!("  {part}")));
            }
        }
    }

    lines.push(Line::blank());
    lines.push(Line::new(Theme::fg(&theme.colors.text_dim), "[enviar]  [fechar]"));
    lines
}

fn draw_box(frame: &mut Frame, top: usize, bottom: usize, width: usize, lines: &[Line], theme: &Theme) {
    let border = Theme::fg(&theme.colors.modal_border);
    let inner = width.saturating_sub(4);
    let left = SIDE_MARGIN + 1;

    frame.position_cursor(top, left);
    frame.push(&border);
    frame.push(&format!("╭{}╮", "─".repeat(width.saturating_sub(2))));
    frame.push(Theme::reset());

    let body_rows = bottom.saturating_sub(top + 1);
    for offset in 0..body_rows {
        frame.position_cursor(top + 1 + offset, left);
        frame.push(&border);
        frame.push("│ ");
        frame.push(Theme::reset());
        match lines.get(offset) {
            Some(line) => {
                frame.push(&line.style);
                frame.push_padded(&line.text, inner);
                frame.push(Theme::reset());
            }
            None => frame.spaces(inner),
        }
        frame.push(&border);
        frame.push(" │");
        frame.push(Theme::reset());
    }

    frame.position_cursor(bottom, left);
    frame.push(&border);
    frame.push(&format!("╰{}╯", "─".repeat(width.saturating_sub(2))));
    frame.push(Theme::reset());
}
