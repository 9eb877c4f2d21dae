//! ANSI escape sequence generation.

use crate::color::Rgba;
use crate::style::{Style, TextAttributes};
use crate::terminal::ColorSupport;
use std::io::{self, Write};

/// Reset all attributes and colors.
pub const RESET: &str = "\x1b[0m";

/// Color output mode for ANSI sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// True color (24-bit RGB).
    #[default]
    TrueColor,
    /// 256-color palette.
    Color256,
    /// 16-color (basic ANSI).
    Color16,
    /// No escape sequences at all.
    NoColor,
}

impl ColorMode {
    /// Parse a CLI color mode name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => Some(Self::TrueColor),
            "256" | "color256" => Some(Self::Color256),
            "16" | "color16" | "basic" => Some(Self::Color16),
            "none" | "never" | "nocolor" => Some(Self::NoColor),
            _ => None,
        }
    }
}

impl From<ColorSupport> for ColorMode {
    fn from(support: ColorSupport) -> Self {
        match support {
            ColorSupport::TrueColor => ColorMode::TrueColor,
            ColorSupport::Extended => ColorMode::Color256,
            ColorSupport::Basic => ColorMode::Color16,
            ColorSupport::None => ColorMode::NoColor,
        }
    }
}

/// Write a u8 as decimal digits to a writer without formatting overhead.
#[inline]
fn write_u8_decimal(w: &mut impl Write, n: u8) -> io::Result<()> {
    if n >= 100 {
        w.write_all(&[b'0' + n / 100, b'0' + (n / 10) % 10, b'0' + n % 10])
    } else if n >= 10 {
        w.write_all(&[b'0' + n / 10, b'0' + n % 10])
    } else {
        w.write_all(&[b'0' + n])
    }
}

/// Write SGR sequence for foreground color to a writer.
pub fn write_fg_color_with_mode(
    w: &mut impl Write,
    color: Rgba,
    mode: ColorMode,
) -> io::Result<()> {
    match mode {
        ColorMode::TrueColor => {
            let (r, g, b) = color.to_rgb_u8();
            w.write_all(b"\x1b[38;2;")?;
            write_u8_decimal(w, r)?;
            w.write_all(b";")?;
            write_u8_decimal(w, g)?;
            w.write_all(b";")?;
            write_u8_decimal(w, b)?;
            w.write_all(b"m")
        }
        ColorMode::Color256 => {
            w.write_all(b"\x1b[38;5;")?;
            write_u8_decimal(w, color.to_256_color())?;
            w.write_all(b"m")
        }
        ColorMode::Color16 => {
            let idx = color.to_16_color();
            // 30-37 normal, 90-97 bright
            let code = if idx < 8 { 30 + idx } else { 90 + idx - 8 };
            w.write_all(b"\x1b[")?;
            write_u8_decimal(w, code)?;
            w.write_all(b"m")
        }
        ColorMode::NoColor => Ok(()),
    }
}

/// Write SGR sequence for background color to a writer.
pub fn write_bg_color_with_mode(
    w: &mut impl Write,
    color: Rgba,
    mode: ColorMode,
) -> io::Result<()> {
    match mode {
        ColorMode::TrueColor => {
            let (r, g, b) = color.to_rgb_u8();
            w.write_all(b"\x1b[48;2;")?;
            write_u8_decimal(w, r)?;
            w.write_all(b";")?;
            write_u8_decimal(w, g)?;
            w.write_all(b";")?;
            write_u8_decimal(w, b)?;
            w.write_all(b"m")
        }
        ColorMode::Color256 => {
            w.write_all(b"\x1b[48;5;")?;
            write_u8_decimal(w, color.to_256_color())?;
            w.write_all(b"m")
        }
        ColorMode::Color16 => {
            let idx = color.to_16_color();
            // 40-47 normal, 100-107 bright
            let code = if idx < 8 { 40 + idx } else { 100 + idx - 8 };
            w.write_all(b"\x1b[")?;
            write_u8_decimal(w, code)?;
            w.write_all(b"m")
        }
        ColorMode::NoColor => Ok(()),
    }
}

/// Write SGR sequence for text attributes to a writer.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    const CODES: [(TextAttributes, &str); 1] = [(TextAttributes::BOLD, "1")];

    let mut first = true;
    for (flag, code) in CODES {
        if !attrs.contains(flag) {
            continue;
        }
        let prefix: &[u8] = if first { b"\x1b[" } else { b";" };
        w.write_all(prefix)?;
        w.write_all(code.as_bytes())?;
        first = false;
    }
    if first { Ok(()) } else { w.write_all(b"m") }
}

/// Write the escape sequences that switch to `style`.
///
/// Returns whether anything was written, i.e. whether a [`RESET`] is needed
/// afterwards.
pub fn write_style(w: &mut impl Write, style: Style, mode: ColorMode) -> io::Result<bool> {
    if mode == ColorMode::NoColor || style.is_empty() {
        return Ok(false);
    }
    write_attributes(w, style.attributes)?;
    if let Some(bg) = style.bg {
        write_bg_color_with_mode(w, bg, mode)?;
    }
    if let Some(fg) = style.fg {
        write_fg_color_with_mode(w, fg, mode)?;
    }
    Ok(true)
}
