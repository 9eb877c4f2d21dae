//! Color capability detection from the environment.

use std::env;

/// Color support level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorSupport {
    /// No color support.
    #[default]
    None,
    /// 16 colors (basic ANSI).
    Basic,
    /// 256 colors.
    Extended,
    /// True color (16 million colors).
    TrueColor,
}

/// The environment variables that decide color support.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    pub term: String,
    pub colorterm: String,
    /// `NO_COLOR` is set to a non-empty value.
    pub no_color: bool,
}

impl Environment {
    /// Read `TERM`, `COLORTERM` and `NO_COLOR` from the process.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            term: env::var("TERM").unwrap_or_default(),
            colorterm: env::var("COLORTERM").unwrap_or_default(),
            no_color: env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }

    /// Color support for an output stream.
    #[must_use]
    pub fn color_support(&self, is_tty: bool) -> ColorSupport {
        if self.no_color || !is_tty || self.term == "dumb" {
            return ColorSupport::None;
        }
        detect_color(&self.term, &self.colorterm)
    }
}

fn detect_color(term: &str, colorterm: &str) -> ColorSupport {
    // Check for explicit true color support
    if colorterm.eq_ignore_ascii_case("truecolor") || colorterm.eq_ignore_ascii_case("24bit") {
        return ColorSupport::TrueColor;
    }

    if term.contains("24bit") || term.contains("truecolor") || term.contains("direct") {
        return ColorSupport::TrueColor;
    }

    // Known true color terminals
    let truecolor_terms = ["alacritty", "kitty", "wezterm", "ghostty"];
    if truecolor_terms.iter().any(|t| term.contains(t)) {
        return ColorSupport::TrueColor;
    }

    if term.contains("256") {
        return ColorSupport::Extended;
    }

    // Assume basic color if TERM is set
    if !term.is_empty() {
        return ColorSupport::Basic;
    }

    ColorSupport::None
}
