//! Unicode utilities: grapheme segmentation, UTF-8 lengths and normalization.

mod grapheme;
mod normalize;
mod utf8;

pub use grapheme::{GraphemeIterator, Segmenter, UnicodeSegmenter, grapheme_indices, graphemes};
pub use normalize::{composed_form, is_normalized_nfc, normalize_nfc};
pub use utf8::{code_point_lengths, utf8_len};
