//! Annotated segments produced by the highlight pipeline.

use crate::highlight::category::ByteCategory;

/// One grapheme cluster with its byte-length annotation.
///
/// Segments are values produced fresh by every pipeline pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedSegment {
    /// The cluster exactly as it appears in the input.
    pub text: String,
    /// Byte offset of the cluster in the input.
    pub byte_offset: usize,
    /// `min(4, max(byte_lengths))`.
    pub category: ByteCategory,
    /// UTF-8 length of each code point in `text`.
    pub byte_lengths: Vec<u8>,
    /// Whether the category is enabled in the selection.
    pub highlighted: bool,
    /// NFC form of `text` when it differs, e.g. `が` for `か` + U+3099.
    pub composed: Option<String>,
}

impl AnnotatedSegment {
    /// Tooltip text: the byte lengths joined with `+`, e.g. `"3+3"`.
    #[must_use]
    pub fn tooltip(&self) -> String {
        join_lengths(&self.byte_lengths, "+")
    }

    /// Raw byte lengths joined with `,`, as exposed in a `data-byte` attribute.
    #[must_use]
    pub fn data_bytes(&self) -> String {
        join_lengths(&self.byte_lengths, ",")
    }

    /// Total UTF-8 length of the cluster.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.text.len()
    }

    /// Number of code points in the cluster.
    #[must_use]
    pub fn code_point_count(&self) -> usize {
        self.byte_lengths.len()
    }

    /// Whether the cluster is a decomposed sequence with a precomposed form.
    #[must_use]
    pub fn is_decomposed(&self) -> bool {
        self.composed.is_some()
    }
}

fn join_lengths(lengths: &[u8], sep: &str) -> String {
    let mut out = String::with_capacity(lengths.len() * (1 + sep.len()));
    for (i, len) in lengths.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push(char::from(b'0' + len));
    }
    out
}
