//! Byte-length classification of a single grapheme cluster.

use crate::error::{Error, Result};
use crate::highlight::category::ByteCategory;
use crate::unicode::code_point_lengths;

/// UTF-8 lengths of a cluster's code points and the category they reduce to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Encoded length of each code point, in order.
    pub byte_lengths: Vec<u8>,
    /// `min(4, max(byte_lengths))`.
    pub category: ByteCategory,
}

impl Classification {
    /// Total UTF-8 length of the cluster.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.byte_lengths.iter().map(|&n| usize::from(n)).sum()
    }
}

/// Classify one grapheme cluster.
///
/// Returns [`Error::InvalidInput`] for an empty cluster, which only happens
/// when a segmenter breaks its contract.
pub fn classify(cluster: &str) -> Result<Classification> {
    if cluster.is_empty() {
        return Err(Error::InvalidInput("empty grapheme cluster".to_string()));
    }

    let byte_lengths: Vec<u8> = code_point_lengths(cluster).collect();
    let max_len = byte_lengths.iter().copied().max().unwrap_or(0);
    let category = ByteCategory::from_max_len(usize::from(max_len))?;

    Ok(Classification {
        byte_lengths,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(cluster: &str, lengths: &[u8], category: ByteCategory) {
        let c = classify(cluster).unwrap();
        assert_eq!(c.byte_lengths, lengths, "lengths for {cluster:?}");
        assert_eq!(c.category, category, "category for {cluster:?}");
    }

    #[test]
    fn classify_single_code_points() {
        check("A", &[1], ByteCategory::One);
        check("\u{03B1}", &[2], ByteCategory::Two);
        check("\u{3042}", &[3], ByteCategory::Three);
        check("\u{20BB7}", &[4], ByteCategory::FourPlus);
    }

    #[test]
    fn classify_combining_sequence_uses_max_not_sum() {
        check("\u{304B}\u{3099}", &[3, 3], ByteCategory::Three);
        check("e\u{0301}", &[1, 2], ByteCategory::Two);
    }

    #[test]
    fn classify_emoji_zwj_sequence() {
        check(
            "\u{1F647}\u{1F3FC}\u{200D}\u{2640}\u{FE0F}",
            &[4, 4, 3, 3, 3],
            ByteCategory::FourPlus,
        );
    }

    #[test]
    fn classify_control_characters() {
        check("\r\n", &[1, 1], ByteCategory::One);
        check("\u{0000}", &[1], ByteCategory::One);
    }

    #[test]
    fn classify_empty_is_invalid_input() {
        let err = classify("").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn total_bytes_matches_str_len() {
        let cluster = "\u{1F647}\u{1F3FC}\u{200D}\u{2640}\u{FE0F}";
        assert_eq!(classify(cluster).unwrap().total_bytes(), cluster.len());
    }
}
