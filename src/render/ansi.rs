//! Terminal output with SGR colors.

use crate::ansi::{ColorMode, RESET, write_style};
use crate::error::Result;
use crate::highlight::{Highlight, PLACEHOLDER, palette};
use crate::render::{IntoBuffer, SegmentRenderer};
use std::io::Write;

/// Writes highlighted segments with category colors.
///
/// Segments that are not highlighted are written unstyled. Terminals have no
/// tooltips, so the byte lengths only show up in other renderers.
#[derive(Debug)]
pub struct AnsiRenderer<W: Write> {
    writer: W,
    color_mode: ColorMode,
}

impl<W: Write> AnsiRenderer<W> {
    /// Create a true color renderer.
    pub fn new(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::TrueColor)
    }

    /// Create a renderer with the given color depth.
    pub fn with_color_mode(writer: W, color_mode: ColorMode) -> Self {
        Self { writer, color_mode }
    }

    /// Get the current color output mode.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Get back the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_styled(&mut self, text: &str, style: crate::style::Style) -> Result<()> {
        let styled = write_style(&mut self.writer, style, self.color_mode)?;
        self.writer.write_all(text.as_bytes())?;
        if styled {
            self.writer.write_all(RESET.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: Write> SegmentRenderer for AnsiRenderer<W> {
    fn render(&mut self, result: &Highlight) -> Result<()> {
        match result {
            Highlight::Empty => self.write_styled(PLACEHOLDER, palette::placeholder_style())?,
            Highlight::Segments(segments) => {
                for segment in segments {
                    // Line breaks stay unstyled so backgrounds don't bleed.
                    let line_break = segment.text.contains(['\n', '\r']);
                    if segment.highlighted && !line_break {
                        self.write_styled(
                            &segment.text,
                            palette::highlight_style(segment.category),
                        )?;
                    } else {
                        self.writer.write_all(segment.text.as_bytes())?;
                    }
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl IntoBuffer for AnsiRenderer<Vec<u8>> {
    fn into_buffer(self) -> Vec<u8> {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{Selection, highlight};
    use crate::render::render_to_string;

    fn render(input: &str, selection: &Selection, mode: ColorMode) -> String {
        let result = highlight(input, selection).unwrap();
        render_to_string(|buf| AnsiRenderer::with_color_mode(buf, mode), &result).unwrap()
    }

    #[test]
    fn highlighted_segment_is_wrapped_in_sgr() {
        let out = render("A\u{20BB7}", &Selection::default(), ColorMode::TrueColor);
        assert_eq!(
            out,
            "A\x1b[1m\x1b[48;2;254;202;202m\x1b[38;2;127;29;29m\u{20BB7}\x1b[0m"
        );
    }

    #[test]
    fn no_color_mode_writes_plain_text() {
        let input = "A\u{3042}\u{20BB7}";
        let out = render(input, &Selection::all(), ColorMode::NoColor);
        assert_eq!(out, input);
    }

    #[test]
    fn unselected_segments_are_plain() {
        let out = render("abc", &Selection::default(), ColorMode::TrueColor);
        assert_eq!(out, "abc");
    }

    #[test]
    fn line_breaks_are_not_styled() {
        let out = render("a\nb", &Selection::all(), ColorMode::Color256);
        assert!(out.contains("\x1b[0m\nb") || out.contains("\x1b[0m\n\x1b["));
        assert!(!out.contains("m\n\x1b[0m"));
    }

    #[test]
    fn empty_result_renders_placeholder() {
        let out = render_to_string(AnsiRenderer::new, &Highlight::Empty).unwrap();
        assert!(out.contains(PLACEHOLDER));
        assert!(out.starts_with("\x1b[38;2;156;163;175m"));
        assert!(out.ends_with(RESET));
    }
}
