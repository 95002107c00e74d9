//! Shared rendering utilities.
//!
//! Components draw into a [`Frame`], an in-memory buffer of ANSI output that
//! the render sink writes to the terminal in one go. Widths are counted in
//! chars so accented Portuguese labels line up.

use crate::ui::theme::Theme;

/// Buffered ANSI output for one full redraw.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed `row`/`col`.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    /// Appends raw text or escape sequences.
    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn spaces(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    /// Appends `text` cut to `width` chars, then pads with spaces to `width`.
    pub fn push_padded(&mut self, text: &str, width: usize) {
        let shown = truncate(text, width);
        let len = shown.chars().count();
        self.buf.push_str(&shown);
        self.spaces(width.saturating_sub(len));
    }

    /// Appends `text` centered in a line of `width` chars.
    pub fn push_centered(&mut self, text: &str, width: usize) {
        let shown = truncate(text, width);
        let len = shown.chars().count();
        let left = width.saturating_sub(len) / 2;
        self.spaces(left);
        self.buf.push_str(&shown);
        self.spaces(width.saturating_sub(left + len));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Cuts `text` to at most `width` chars, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Greedy word wrap to lines of at most `width` chars.
///
/// Words longer than `width` are truncated rather than split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(&word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Non-overlapping char ranges of `text` that match the lowercase `term`.
///
/// Matching is case-insensitive, one char at a time, so indices always refer
/// to chars of the original `text`.
///
/// # Examples
///
/// ```
/// use vagas::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Banco de Dados", "da"), vec![(9, 11)]);
/// assert!(match_ranges("Banco", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = term.chars().map(lower_char).collect();
    if needle.is_empty() {
        return vec![];
    }
    let hay: Vec<char> = text.chars().map(lower_char).collect();

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= hay.len() {
        if hay[pos..pos + needle.len()] == needle[..] {
            ranges.push((pos, pos + needle.len()));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Draws `text` with `ranges` in the match highlight colors.
///
/// After each highlighted run the `base` style is re-applied so the rest of
/// the line keeps its color.
pub fn render_highlighted_text(
    frame: &mut Frame,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base: &str,
) {
    if ranges.is_empty() {
        frame.push(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            frame.push(&chars[current_pos..start].iter().collect::<String>());
        }

        frame.push(&Theme::fg(&theme.colors.match_highlight_fg));
        frame.push(&Theme::bg(&theme.colors.match_highlight_bg));
        frame.push(&chars[start..end].iter().collect::<String>());
        frame.push(Theme::reset());
        frame.push(base);

        current_pos = current_pos.max(end);
    }

    if current_pos < chars.len() {
        frame.push(&chars[current_pos..].iter().collect::<String>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_case_insensitive_and_char_based() {
        assert_eq!(match_ranges("Estágio em RH", "rh"), vec![(11, 13)]);
        assert_eq!(match_ranges("Ágil ágil", "ágil"), vec![(0, 4), (5, 9)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Dev", "devops").is_empty());
    }

    #[test]
    fn truncation_marks_the_cut() {
        assert_eq!(truncate("Analista", 20), "Analista");
        assert_eq!(truncate("Analista", 5), "Anal…");
        assert_eq!(truncate("Analista", 0), "");
    }

    #[test]
    fn wrapping_respects_width() {
        let lines = wrap("Estamos buscando profissionais talentosos", 16);
        assert_eq!(lines, ["Estamos buscando", "profissionais", "talentosos"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn padding_counts_chars() {
        let mut frame = Frame::new();
        frame.push_padded("Área", 6);
        assert_eq!(frame.as_str(), "Área  ");

        let mut frame = Frame::new();
        frame.push_centered("ab", 6);
        assert_eq!(frame.as_str(), "  ab  ");
    }

    #[test]
    fn highlighted_text_keeps_all_chars() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_highlighted_text(&mut frame, "Banco de Dados", &[(0, 5)], &theme, "");
        let plain: String = strip_ansi(frame.as_str());
        assert_eq!(plain, "Banco de Dados");
    }

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in text.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm' | 'H') => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }
}
