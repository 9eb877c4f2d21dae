//! The highlight pipeline: segment, classify, apply the selection.

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::highlight::category::ByteCategory;
use crate::highlight::classifier::classify;
use crate::highlight::segment::AnnotatedSegment;
use crate::highlight::selection::Selection;
use crate::unicode::{Segmenter, UnicodeSegmenter, composed_form};
use std::borrow::Cow;

/// Result of one pipeline pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Highlight {
    /// The input was empty; renderers show a placeholder instead of segments.
    Empty,
    /// One annotated segment per grapheme cluster, in input order.
    Segments(Vec<AnnotatedSegment>),
}

impl Highlight {
    /// Whether this is the empty-input marker.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The segments, or an empty slice for [`Highlight::Empty`].
    #[must_use]
    pub fn segments(&self) -> &[AnnotatedSegment] {
        match self {
            Self::Empty => &[],
            Self::Segments(segments) => segments,
        }
    }

    /// Concatenated segment text; equals the pipeline input.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments().iter().map(|s| s.text.as_str()).collect()
    }

    /// Per-category counts for this result.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for segment in self.segments() {
            summary.clusters[segment.category.as_usize()] += 1;
            summary.total_bytes += segment.total_bytes();
            if segment.highlighted {
                summary.highlighted += 1;
            }
            if segment.is_decomposed() {
                summary.decomposed += 1;
            }
        }
        summary
    }
}

/// Cluster counts of a [`Highlight`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    clusters: [usize; ByteCategory::COUNT],
    /// Total UTF-8 length of the input.
    pub total_bytes: usize,
    /// Clusters whose category is enabled.
    pub highlighted: usize,
    /// Clusters that have a different NFC form.
    pub decomposed: usize,
}

impl Summary {
    /// Number of clusters in `category`.
    #[must_use]
    pub const fn count(&self, category: ByteCategory) -> usize {
        self.clusters[category.as_usize()]
    }

    /// Total number of clusters.
    #[must_use]
    pub fn total_clusters(&self) -> usize {
        self.clusters.iter().sum()
    }
}

/// Highlight `input` using extended grapheme clusters.
///
/// Empty input yields [`Highlight::Empty`]. Errors only if the segmenter
/// produces an empty cluster, which the built-in one never does.
pub fn highlight(input: &str, selection: &Selection) -> Result<Highlight> {
    highlight_with(&UnicodeSegmenter, input, selection)
}

/// Highlight `input` with a custom segmenter.
pub fn highlight_with<S>(segmenter: &S, input: &str, selection: &Selection) -> Result<Highlight>
where
    S: Segmenter + ?Sized,
{
    if input.is_empty() {
        return Ok(Highlight::Empty);
    }

    let clusters = segmenter.segment(input);
    let mut segments = Vec::with_capacity(clusters.len());
    for (byte_offset, cluster) in clusters {
        let classification = classify(cluster)?;
        segments.push(AnnotatedSegment {
            text: cluster.to_string(),
            byte_offset,
            category: classification.category,
            byte_lengths: classification.byte_lengths,
            highlighted: selection.is_enabled(classification.category),
            composed: composed_form(cluster),
        });
    }

    emit_log(
        LogLevel::Debug,
        &format!(
            "highlighted {} clusters from {} bytes",
            segments.len(),
            input.len()
        ),
    );
    Ok(Highlight::Segments(segments))
}

/// Highlight `input`, falling back to [`Highlight::Empty`] on error.
///
/// For views that must keep rendering: the failure is reported through the
/// log callback and the placeholder is shown instead.
#[must_use]
pub fn highlight_or_placeholder(input: &str, selection: &Selection) -> Highlight {
    highlight_or_placeholder_with(&UnicodeSegmenter, input, selection)
}

/// [`highlight_or_placeholder`] with a custom segmenter.
#[must_use]
pub fn highlight_or_placeholder_with<S>(
    segmenter: &S,
    input: &str,
    selection: &Selection,
) -> Highlight
where
    S: Segmenter + ?Sized,
{
    match highlight_with(segmenter, input, selection) {
        Ok(result) => result,
        Err(err) => {
            emit_log(LogLevel::Error, &format!("highlight failed: {err}"));
            Highlight::Empty
        }
    }
}

/// Result of highlighting raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LossyHighlight {
    pub highlight: Highlight,
    /// Whether invalid input was replaced with U+FFFD before segmenting.
    pub repaired: bool,
}

/// Highlight bytes that may not be valid UTF-8.
///
/// Each invalid sequence becomes U+FFFD and is classified as its own
/// three-byte cluster. An encoded surrogate (`ED A0..=BF 80..=BF`, as
/// written by WTF-8 or CESU-8 encoders) counts as one invalid sequence.
pub fn highlight_bytes(bytes: &[u8], selection: &Selection) -> Result<LossyHighlight> {
    let text = decode_lossy(bytes);
    let repaired = matches!(text, Cow::Owned(_));
    finish_lossy(&text, repaired, "UTF-8", selection)
}

/// Highlight UTF-16 code units, e.g. text handed over by a JavaScript or
/// Windows host.
///
/// Unpaired surrogates are kept in place: each becomes one U+FFFD cluster,
/// three bytes wide, the same width a UTF-8 encoder gives a lone surrogate.
pub fn highlight_utf16(units: &[u16], selection: &Selection) -> Result<LossyHighlight> {
    let mut repaired = false;
    let text: String = char::decode_utf16(units.iter().copied())
        .map(|unit| {
            unit.unwrap_or_else(|_| {
                repaired = true;
                char::REPLACEMENT_CHARACTER
            })
        })
        .collect();
    finish_lossy(&text, repaired, "UTF-16", selection)
}

fn finish_lossy(
    text: &str,
    repaired: bool,
    encoding: &str,
    selection: &Selection,
) -> Result<LossyHighlight> {
    if repaired {
        emit_log(
            LogLevel::Warn,
            &format!("input was not valid {encoding}; invalid sequences replaced with U+FFFD"),
        );
    }
    Ok(LossyHighlight {
        highlight: highlight(text, selection)?,
        repaired,
    })
}

/// `String::from_utf8_lossy`, except that an encoded surrogate yields one
/// U+FFFD instead of three.
fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    let Some(first) = find_encoded_surrogate(bytes) else {
        return String::from_utf8_lossy(bytes);
    };

    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    let mut next = Some(first);
    while let Some(at) = next {
        out.push_str(&String::from_utf8_lossy(&rest[..at]));
        out.push(char::REPLACEMENT_CHARACTER);
        rest = &rest[at + 3..];
        next = find_encoded_surrogate(rest);
    }
    out.push_str(&String::from_utf8_lossy(rest));
    Cow::Owned(out)
}

/// Start of the first `ED A0..=BF 80..=BF` triple. Valid UTF-8 never
/// contains one, since `ED` must be followed by `80..=9F`.
fn find_encoded_surrogate(bytes: &[u8]) -> Option<usize> {
    bytes.windows(3).position(|w| {
        w[0] == 0xED && (0xA0..=0xBF).contains(&w[1]) && (0x80..=0xBF).contains(&w[2])
    })
}
