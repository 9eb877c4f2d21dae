//! RGBA color type and terminal palette conversion.
//!
//! [`Rgba`] stores floating-point components. The highlight palette is
//! defined in these terms and converted to whatever the output supports:
//! true color, the 256-color palette, the basic 16 colors, or CSS hex.
//!
//! # Examples
//!
//! ```
//! use nbyte_highlighter::Rgba;
//!
//! let blue_200 = Rgba::from_rgb_u8(0xbf, 0xdb, 0xfe);
//! assert_eq!(blue_200.to_256_color(), 153);
//! assert_eq!(blue_200.to_string(), "#BFDBFE");
//! ```

use std::fmt;

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to u8 RGB tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Alpha as a u8, clamping to [0, 255].
    #[must_use]
    pub fn alpha_u8(self) -> u8 {
        (self.a * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// Check if this color is fully opaque.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Convert to nearest 256-color palette index.
    ///
    /// Uses the 6x6x6 color cube (colors 16-231) or grayscale ramp (232-255)
    /// depending on which provides the closest match.
    #[must_use]
    pub fn to_256_color(self) -> u8 {
        let (r, g, b) = self.to_rgb_u8();

        let gray = ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8;
        let near_gray = |c: u8| (i16::from(c) - i16::from(gray)).abs() < 10;
        if near_gray(r) && near_gray(g) && near_gray(b) {
            // 232-255: 24 levels from dark to light
            let gray_idx = (u16::from(gray) * 24 / 256) as u8;
            return 232 + gray_idx.min(23);
        }

        16 + 36 * nearest_cube_index(r) + 6 * nearest_cube_index(g) + nearest_cube_index(b)
    }

    /// Convert to nearest 16-color (basic ANSI) palette index.
    ///
    /// 0-7 are black, red, green, yellow, blue, magenta, cyan, white; 8-15 are
    /// the bright versions.
    #[must_use]
    pub fn to_16_color(self) -> u8 {
        #[rustfmt::skip]
        const PALETTE: [(i32, i32, i32); 16] = [
            (0, 0, 0),       // 0 Black
            (128, 0, 0),     // 1 Red
            (0, 128, 0),     // 2 Green
            (128, 128, 0),   // 3 Yellow
            (0, 0, 128),     // 4 Blue
            (128, 0, 128),   // 5 Magenta
            (0, 128, 128),   // 6 Cyan
            (192, 192, 192), // 7 White
            (128, 128, 128), // 8 Bright Black
            (255, 0, 0),     // 9 Bright Red
            (0, 255, 0),     // 10 Bright Green
            (255, 255, 0),   // 11 Bright Yellow
            (0, 0, 255),     // 12 Bright Blue
            (255, 0, 255),   // 13 Bright Magenta
            (0, 255, 255),   // 14 Bright Cyan
            (255, 255, 255), // 15 Bright White
        ];

        let (r, g, b) = self.to_rgb_u8();
        let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));

        let mut best_idx = 0;
        let mut min_dist = i32::MAX;
        for (i, &(pr, pg, pb)) in PALETTE.iter().enumerate() {
            let (dr, dg, db) = (r - pr, g - pg, b - pb);
            let dist = dr * dr + dg * dg + db * db;
            if dist < min_dist {
                min_dist = dist;
                best_idx = i;
            }
        }

        best_idx as u8
    }
}

/// Nearest index in the 6x6x6 cube for one component.
///
/// Cube values are [0, 95, 135, 175, 215, 255]; boundaries sit at the
/// midpoints 48, 115, 155, 195, 235.
#[inline]
const fn nearest_cube_index(val: u8) -> u8 {
    match val {
        0..48 => 0,
        48..115 => 1,
        115..155 => 2,
        155..195 => 3,
        195..235 => 4,
        _ => 5,
    }
}

impl fmt::Display for Rgba {
    /// `#RRGGBB`, or `#RRGGBBAA` when translucent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb_u8();
        if self.is_opaque() {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{r:02X}{g:02X}{b:02X}{:02X}", self.alpha_u8())
        }
    }
}
