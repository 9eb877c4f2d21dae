//! Presentation of highlight results.
//!
//! A [`SegmentRenderer`] turns a [`Highlight`] into output: every segment
//! becomes a styled element keyed by its category with the joined byte
//! lengths as tooltip, and [`Highlight::Empty`] becomes the placeholder.

mod ansi;
mod html;
mod list;

pub use ansi::AnsiRenderer;
pub use html::{HtmlRenderer, escape_html};
pub use list::ListRenderer;

use crate::error::Result;
use crate::highlight::Highlight;

/// Output side of the pipeline.
pub trait SegmentRenderer {
    /// Render one pipeline result.
    fn render(&mut self, result: &Highlight) -> Result<()>;
}

/// Render `result` into a string with a renderer writing to a `Vec<u8>`.
pub fn render_to_string<R, F>(make: F, result: &Highlight) -> Result<String>
where
    R: SegmentRenderer + IntoBuffer,
    F: FnOnce(Vec<u8>) -> R,
{
    let mut renderer = make(Vec::new());
    renderer.render(result)?;
    Ok(String::from_utf8_lossy(&renderer.into_buffer()).into_owned())
}

/// Renderers that can hand back an in-memory output buffer.
pub trait IntoBuffer {
    /// Consume the renderer and return what it wrote.
    fn into_buffer(self) -> Vec<u8>;
}
