//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML palettes of hex colors. Four Catppuccin flavours are
//! compiled in; a custom file with the same shape can be loaded at start-up.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! tag_fg = "#cba6f7"
//! error_fg = "#f38ba8"
//! success_fg = "#1e1e2e"
//! success_bg = "#a6e3a1"
//! modal_border = "#f5c2e7"
//! ```

use crate::domain::{Result, VagasError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active filter button / selected sort option.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer hints, disabled controls, secondary text.
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,

    /// Search term highlight inside listing titles.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Contract type tag on cards and in the detail overlay.
    pub tag_fg: String,
    /// Inline field errors.
    pub error_fg: String,

    /// Success banner.
    pub success_fg: String,
    pub success_bg: String,

    pub modal_border: String,
}

impl Theme {
    /// Loads a built-in theme by name; `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`VagasError::Io`] when the file cannot be read and
    /// [`VagasError::Theme`] when it is not a valid palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| VagasError::Theme(e.to_string()))
    }

    /// Parses `#rrggbb`; malformed input renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").expect("Built-in catppuccin-mocha theme should always parse")
    }
}
