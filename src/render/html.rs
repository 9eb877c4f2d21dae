//! HTML fragment output.
//!
//! Every cluster becomes a `<span>` carrying its byte lengths in a
//! `data-byte` attribute. Highlighted clusters also get category classes,
//! inline colors and a `title` tooltip such as `3+3`.

use crate::error::Result;
use crate::highlight::{AnnotatedSegment, Highlight, PLACEHOLDER, palette};
use crate::render::{IntoBuffer, SegmentRenderer};
use std::io::Write;

/// Writes highlight results as inline HTML.
#[derive(Debug)]
pub struct HtmlRenderer<W: Write> {
    writer: W,
    inline_styles: bool,
}

impl<W: Write> HtmlRenderer<W> {
    /// Create a renderer that emits class names only.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            inline_styles: false,
        }
    }

    /// Also emit `style` attributes so the fragment works without a
    /// stylesheet.
    #[must_use]
    pub fn with_inline_styles(mut self, inline_styles: bool) -> Self {
        self.inline_styles = inline_styles;
        self
    }

    /// Get back the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_segment(&mut self, segment: &AnnotatedSegment) -> Result<()> {
        let text = escape_html(&segment.text);
        let data = segment.data_bytes();
        if !segment.highlighted {
            write!(self.writer, "<span data-byte=\"{data}\">{text}</span>")?;
            return Ok(());
        }

        let colors = palette::colors(segment.category);
        write!(
            self.writer,
            "<span class=\"nbyte-hl nbyte-{} nbyte-{}\"",
            segment.category.as_u8(),
            colors.name
        )?;
        if self.inline_styles {
            write!(
                self.writer,
                " style=\"background-color:{};color:{};font-weight:bold\"",
                colors.background, colors.foreground
            )?;
        }
        write!(self.writer, " title=\"{}\"", segment.tooltip())?;
        if let Some(composed) = &segment.composed {
            write!(self.writer, " data-nfc=\"{}\"", escape_html(composed))?;
        }
        write!(self.writer, " data-byte=\"{data}\">{text}</span>")?;
        Ok(())
    }
}

impl<W: Write> SegmentRenderer for HtmlRenderer<W> {
    fn render(&mut self, result: &Highlight) -> Result<()> {
        match result {
            Highlight::Empty => {
                write!(
                    self.writer,
                    "<span class=\"nbyte-placeholder\">{PLACEHOLDER}</span>"
                )?;
            }
            Highlight::Segments(segments) => {
                for segment in segments {
                    self.write_segment(segment)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl IntoBuffer for HtmlRenderer<Vec<u8>> {
    fn into_buffer(self) -> Vec<u8> {
        self.writer
    }
}

/// Escape text for use in HTML content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
