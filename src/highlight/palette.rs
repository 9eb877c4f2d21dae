//! Fixed category colors: 1 byte blue, 2 green, 3 yellow, 4+ red.
//!
//! Each category uses a light background with a dark foreground of the same
//! hue (the Tailwind 200/900 pairs of the web front end).

use crate::color::Rgba;
use crate::highlight::category::ByteCategory;
use crate::style::Style;

/// Colors for one category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryColors {
    /// Hue name, also used in CSS class names.
    pub name: &'static str,
    pub background: Rgba,
    pub foreground: Rgba,
}

const BLUE: CategoryColors = CategoryColors {
    name: "blue",
    background: Rgba::from_rgb_u8(0xbf, 0xdb, 0xfe),
    foreground: Rgba::from_rgb_u8(0x1e, 0x3a, 0x8a),
};

const GREEN: CategoryColors = CategoryColors {
    name: "green",
    background: Rgba::from_rgb_u8(0xbb, 0xf7, 0xd0),
    foreground: Rgba::from_rgb_u8(0x14, 0x53, 0x2d),
};

const YELLOW: CategoryColors = CategoryColors {
    name: "yellow",
    background: Rgba::from_rgb_u8(0xfe, 0xf0, 0x8a),
    foreground: Rgba::from_rgb_u8(0x71, 0x3f, 0x12),
};

const RED: CategoryColors = CategoryColors {
    name: "red",
    background: Rgba::from_rgb_u8(0xfe, 0xca, 0xca),
    foreground: Rgba::from_rgb_u8(0x7f, 0x1d, 0x1d),
};

/// Muted gray used for the empty-input placeholder.
pub const PLACEHOLDER_COLOR: Rgba = Rgba::from_rgb_u8(0x9c, 0xa3, 0xaf);

/// Colors for `category`.
#[must_use]
pub const fn colors(category: ByteCategory) -> CategoryColors {
    match category {
        ByteCategory::One => BLUE,
        ByteCategory::Two => GREEN,
        ByteCategory::Three => YELLOW,
        ByteCategory::FourPlus => RED,
    }
}

/// Style applied to a highlighted segment of `category`.
#[must_use]
pub const fn highlight_style(category: ByteCategory) -> Style {
    let colors = colors(category);
    Style::bg(colors.background)
        .with_fg(colors.foreground)
        .with_bold()
}

/// Style applied to the empty-input placeholder.
#[must_use]
pub const fn placeholder_style() -> Style {
    Style::fg(PLACEHOLDER_COLOR)
}
