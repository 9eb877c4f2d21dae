//! `nbyte_highlighter` - highlight grapheme clusters by UTF-8 byte length
//!
//! Text is split into extended grapheme clusters; each cluster is tagged with
//! the UTF-8 length of its code points and bucketed into 1, 2, 3 or 4+
//! bytes. Combining sequences and emoji ZWJ sequences stay one cluster, so
//! `か` + U+3099 is a three-byte cluster (`3+3`) and a gendered emoji with a
//! skin tone is a four-byte one (`4+4+3+3+3`).
//!
//! Nothing leaves the process: there is no persistence and no I/O beyond
//! the writer handed to a renderer.
//!
//! ```
//! use nbyte_highlighter::{ByteCategory, Selection, highlight};
//!
//! let result = highlight("\u{304B}\u{3099}", &Selection::default()).unwrap();
//! let segment = &result.segments()[0];
//! assert_eq!(segment.category, ByteCategory::Three);
//! assert_eq!(segment.tooltip(), "3+3");
//! assert!(!segment.highlighted);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // isatty FFI only
#![allow(clippy::cast_possible_truncation)] // Intentional color and length casts
#![allow(clippy::cast_sign_loss)] // Intentional color conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::module_name_repetitions)] // Allow highlight::Highlight etc
#![allow(clippy::missing_errors_doc)] // Errors are documented on the Error enum
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::must_use_candidate)] // Not every getter needs it

pub mod ansi;
pub mod color;
pub mod error;
pub mod event;
pub mod highlight;
pub mod render;
pub mod session;
pub mod style;
pub mod terminal;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use highlight::{
    AnnotatedSegment, ByteCategory, Highlight, Selection, classify, highlight, highlight_bytes,
    highlight_or_placeholder, highlight_utf16,
};
pub use session::Session;
pub use style::{Style, TextAttributes};

// Re-export rendering types
pub use ansi::ColorMode;
pub use render::{AnsiRenderer, HtmlRenderer, ListRenderer, SegmentRenderer};
