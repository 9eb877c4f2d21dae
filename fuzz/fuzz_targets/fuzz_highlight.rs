//! Fuzz target for the highlight pipeline.
//!
//! Arbitrary bytes go through the lossy entry point; valid UTF-8 must come
//! back unchanged and every segment must be well formed.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nbyte_highlighter::highlight::{Highlight, Selection, highlight_bytes};
use nbyte_highlighter::render::render_to_string;
use nbyte_highlighter::{ByteCategory, HtmlRenderer, ListRenderer};

#[derive(Arbitrary, Debug)]
struct Input {
    enabled: [bool; 4],
    bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let selection: Selection = ByteCategory::ALL
        .into_iter()
        .zip(input.enabled)
        .filter_map(|(category, on)| on.then_some(category))
        .collect();

    let lossy = highlight_bytes(&input.bytes, &selection).expect("built-in segmenter");
    match std::str::from_utf8(&input.bytes) {
        Ok(text) => {
            assert!(!lossy.repaired);
            assert_eq!(lossy.highlight.text(), text);
        }
        Err(_) => assert!(lossy.repaired),
    }
    assert_eq!(lossy.highlight == Highlight::Empty, input.bytes.is_empty());

    for segment in lossy.highlight.segments() {
        assert!(!segment.text.is_empty());
        let max = segment.byte_lengths.iter().copied().max().expect("non-empty cluster");
        assert_eq!(segment.category.as_u8(), max.min(4));
        assert_eq!(segment.highlighted, selection.is_enabled(segment.category));
    }

    // Renderers must accept anything the pipeline produces
    let _ = render_to_string(HtmlRenderer::new, &lossy.highlight);
    let _ = render_to_string(ListRenderer::new, &lossy.highlight);
});
