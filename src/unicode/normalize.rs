//! Unicode normalization helpers.
//!
//! Decomposed sequences such as `か` + U+3099 render like the precomposed
//! `が` but often turn into mojibake in systems that do not expect combining
//! marks. The pipeline uses these helpers to suggest the composed form.

use unicode_normalization::UnicodeNormalization;

/// Normalize `text` to NFC (canonical composition).
#[must_use]
pub fn normalize_nfc(text: &str) -> String {
    text.nfc().collect()
}

/// Check whether `text` is already NFC normalized.
#[must_use]
pub fn is_normalized_nfc(text: &str) -> bool {
    unicode_normalization::is_nfc(text)
}

/// The NFC form of `cluster`, or `None` when it is already composed.
#[must_use]
pub fn composed_form(cluster: &str) -> Option<String> {
    if is_normalized_nfc(cluster) {
        None
    } else {
        let composed = normalize_nfc(cluster);
        (composed != cluster).then_some(composed)
    }
}
