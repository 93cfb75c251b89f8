//! Colour themes and ANSI escape sequence generation.
//!
//! # Built-in Themes
//!
//! - `amber`: warm dark palette in the brand orange (default)
//! - `midnight`: cool dark palette
//!
//! Custom themes are TOML files with the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#fff7ed"
//! header_bg = "#ea580c"
//! selection_fg = "#1c1917"
//! selection_bg = "#fdba74"
//! text_normal = "#e7e5e4"
//! text_dim = "#78716c"
//! border = "#44403c"
//! search_bar_border = "#f97316"
//! match_highlight_fg = "#1c1917"
//! match_highlight_bg = "#fde047"
//! empty_state_fg = "#fb923c"
//! section_fg = "#a8a29e"
//! tag_fg = "#fdba74"
//! badge_fg = "#4ade80"
//! notice_fg = "#60a5fa"
//! safe_fg = "#4ade80"
//! flagged_fg = "#f87171"
//! ```

use crate::domain::error::{HubError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "amber";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colours (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer hints and secondary columns.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Section column of the list.
    pub section_fg: String,
    /// Article tags and platform feature chips.
    pub tag_fg: String,
    /// The "copied" marker next to a mailbox.
    pub badge_fg: String,

    pub notice_fg: String,
    /// Domain checker: not blacklisted.
    pub safe_fg: String,
    /// Domain checker: blacklisted.
    pub flagged_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// ```rust
    /// use lekutao_hub::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("midnight").unwrap().name, "midnight");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "amber" => include_str!("../../themes/amber.toml"),
            "midnight" => include_str!("../../themes/midnight.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Io`] if the file cannot be read and
    /// [`HubError::Theme`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| HubError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Parses `#rrggbb`, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for a hex colour.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex colour.
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
    /// The `amber` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in amber theme should always parse")
    }
}
