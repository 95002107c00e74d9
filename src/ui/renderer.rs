//! Top-level rendering coordinator.
//!
//! The engine never draws anything itself. After each state change the
//! driver calls [`render`], which computes a fresh view model and hands it to
//! a [`RenderSink`]. [`AnsiRenderer`] is the terminal sink; tests use sinks
//! that simply keep the last view model.

use crate::app::AppState;
use crate::domain::Result;
use crate::ui::components;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::Write;

/// Something that can present a view model.
pub trait RenderSink {
    /// Presents `vm`, replacing whatever was shown before.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying output fails.
    fn apply(&mut self, vm: &UIViewModel) -> Result<()>;
}

/// Computes the view model for `state` and applies it to `sink`.
///
/// # Errors
///
/// Propagates the sink's error.
pub fn render(state: &AppState, sink: &mut impl RenderSink) -> Result<()> {
    let viewmodel = state.compute_viewmodel();
    sink.apply(&viewmodel)
}

/// Full-screen ANSI renderer writing to any [`Write`] target.
#[derive(Debug)]
pub struct AnsiRenderer<W: Write> {
    out: W,
    theme: Theme,
    rows: usize,
    cols: usize,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, theme: Theme, rows: usize, cols: usize) -> Self {
        Self { out, theme, rows, cols }
    }

    /// Draws `vm` into a complete frame, screen clear included.
    #[must_use]
    pub fn draw(&self, vm: &UIViewModel) -> String {
        let mut frame = Frame::new();
        frame.push("\u{1b}[2J");
        components::render_page(&mut frame, vm, &self.theme, self.cols, self.rows);
        frame.position_cursor(self.rows.max(components::MIN_ROWS), 1);
        frame.into_string()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for AnsiRenderer<W> {
    fn apply(&mut self, vm: &UIViewModel) -> Result<()> {
        let frame = self.draw(vm);
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
