//! One line per cluster, for inspecting how text was split.

use crate::error::Result;
use crate::highlight::{AnnotatedSegment, Highlight, PLACEHOLDER};
use crate::render::{IntoBuffer, SegmentRenderer};
use std::fmt::Write as _;
use std::io::Write;

/// Writes a tab-separated line per cluster:
/// `offset`, `text`, `category`, `tooltip`, `highlighted`, code points.
///
/// Control characters in `text` are shown as escapes (`\n`, `\t`,
/// `\u{7}`) so every cluster stays on its own line and field; everything
/// else is written as is.
#[derive(Debug)]
pub struct ListRenderer<W: Write> {
    writer: W,
    only_highlighted: bool,
}

impl<W: Write> ListRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            only_highlighted: false,
        }
    }

    /// Skip clusters whose category is not selected.
    #[must_use]
    pub fn only_highlighted(mut self, only: bool) -> Self {
        self.only_highlighted = only;
        self
    }

    /// Get back the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, segment: &AnnotatedSegment) -> Result<()> {
        let mut code_points = String::new();
        for (i, c) in segment.text.chars().enumerate() {
            if i > 0 {
                code_points.push(' ');
            }
            let _ = write!(code_points, "U+{:04X}", u32::from(c));
        }
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            segment.byte_offset,
            escape_controls(&segment.text),
            segment.category,
            segment.tooltip(),
            segment.highlighted,
            code_points
        )?;
        Ok(())
    }
}

impl<W: Write> SegmentRenderer for ListRenderer<W> {
    fn render(&mut self, result: &Highlight) -> Result<()> {
        match result {
            Highlight::Empty => writeln!(self.writer, "{PLACEHOLDER}")?,
            Highlight::Segments(segments) => {
                for segment in segments {
                    if self.only_highlighted && !segment.highlighted {
                        continue;
                    }
                    self.write_line(segment)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_controls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

impl IntoBuffer for ListRenderer<Vec<u8>> {
    fn into_buffer(self) -> Vec<u8> {
        self.writer
    }
}
