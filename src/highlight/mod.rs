//! Byte-length highlighting of grapheme clusters.
//!
//! The pipeline splits text into extended grapheme clusters, measures the
//! UTF-8 length of every code point in each cluster and reduces the lengths
//! to one [`ByteCategory`]. A [`Selection`] decides which categories are
//! marked for display.
//!
//! ```
//! use nbyte_highlighter::highlight::{ByteCategory, Selection, highlight};
//!
//! let result = highlight("Aあ🙇🏼‍♀️", &Selection::default()).unwrap();
//! let marked: Vec<_> = result
//!     .segments()
//!     .iter()
//!     .filter(|s| s.highlighted)
//!     .map(|s| s.tooltip())
//!     .collect();
//! assert_eq!(marked, vec!["4+4+3+3+3"]);
//! assert_eq!(result.segments()[1].category, ByteCategory::Three);
//! ```

mod category;
mod classifier;
pub mod palette;
mod pipeline;
mod segment;
mod selection;

pub use category::ByteCategory;
pub use classifier::{Classification, classify};
pub use pipeline::{
    Highlight, LossyHighlight, Summary, highlight, highlight_bytes, highlight_or_placeholder,
    highlight_or_placeholder_with, highlight_utf16, highlight_with,
};
pub use segment::AnnotatedSegment;
pub use selection::Selection;

/// Text shown instead of segments when the input is empty.
pub const PLACEHOLDER: &str = "ここに結果が出ます";

/// Demonstration text covering every category, combining marks and emoji
/// modifier sequences.
pub const SAMPLE_INPUT: &str = "これは1～4バイト文字などを判定するツールです。

【例文】
𠮷川さんへ
先ほど『α波とβ波のグラフ』を𡚴本さんから貰いました‼
下記のサイトにアップしてますので確認ください❗
« https://example.com/ »
以上、よろしくお願いいたします🙏🏻🙇🏼‍♀️

PS. 結合文字の「か\u{3099} ( か+\u{3099} )」は文字化けするので「が」を使って下さい";
