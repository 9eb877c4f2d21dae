//! Fuzz target for category parsing.
//!
//! Tests that ByteCategory::from_str and from_id never panic and that
//! accepted values round-trip through their canonical forms.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nbyte_highlighter::ByteCategory;

fuzz_target!(|data: &str| {
    if let Ok(category) = data.parse::<ByteCategory>() {
        assert_eq!(category.to_string().parse::<ByteCategory>().ok(), Some(category));
        assert_eq!(ByteCategory::from_id(category.id()), Some(category));
    }
    if let Some(category) = ByteCategory::from_id(data) {
        assert_eq!(category.id(), data);
    }
    let _ = data.parse::<u8>().map(ByteCategory::try_from);
});
