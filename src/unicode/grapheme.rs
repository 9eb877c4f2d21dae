//! Grapheme cluster iteration.

use unicode_segmentation::UnicodeSegmentation;

/// Iterator over extended grapheme clusters in a string.
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for GraphemeIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Iterate over extended grapheme clusters in a string.
///
/// Joining the clusters reproduces `s` exactly. Empty input yields nothing.
#[must_use]
pub fn graphemes(s: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: s.graphemes(true),
    }
}

/// Iterate over extended grapheme clusters with their byte offsets.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Splits text into the clusters the highlight pipeline classifies.
///
/// Implementations must return non-empty slices of `input`, in order, whose
/// concatenation is `input`. The pipeline reports a violation of that
/// contract as [`crate::Error::InvalidInput`].
pub trait Segmenter {
    /// Split `input` into `(byte_offset, cluster)` pairs.
    fn segment<'a>(&self, input: &'a str) -> Vec<(usize, &'a str)>;
}

/// Extended grapheme cluster segmentation (UAX #29).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(&self, input: &'a str) -> Vec<(usize, &'a str)> {
        grapheme_indices(input).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphemes_ascii() {
        let g: Vec<_> = graphemes("hello").collect();
        assert_eq!(g, vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_graphemes_empty() {
        assert_eq!(graphemes("").count(), 0);
        assert!(UnicodeSegmenter.segment("").is_empty());
    }

    #[test]
    fn test_graphemes_emoji_zwj_sequence() {
        // person bowing + medium-light skin tone + ZWJ + female sign + VS16
        let s = "\u{1F647}\u{1F3FC}\u{200D}\u{2640}\u{FE0F}";
        assert_eq!(graphemes(s).collect::<Vec<_>>(), vec![s]);
    }

    #[test]
    fn test_graphemes_combining_voiced_mark() {
        // か + combining dakuten
        assert_eq!(graphemes("\u{304B}\u{3099}").count(), 1);
        // e + combining acute accent
        assert_eq!(graphemes("e\u{0301}").count(), 1);
    }

    #[test]
    fn test_graphemes_crlf_is_one_cluster() {
        let g: Vec<_> = graphemes("a\r\nb").collect();
        assert_eq!(g, vec!["a", "\r\n", "b"]);
    }

    #[test]
    fn test_graphemes_reverse() {
        let g: Vec<_> = graphemes("abc").rev().collect();
        assert_eq!(g, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_segmenter_offsets() {
        let parts = UnicodeSegmenter.segment("Aあ\u{20BB7}");
        assert_eq!(parts, vec![(0, "A"), (1, "あ"), (4, "\u{20BB7}")]);
    }
}
