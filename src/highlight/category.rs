//! Display categories: the byte-length buckets used to pick highlight colors.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Byte-length bucket of a grapheme cluster.
///
/// A cluster's category is the longest UTF-8 encoding among its code points,
/// clamped to [`ByteCategory::FourPlus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteCategory {
    One,
    Two,
    Three,
    /// Four bytes or more.
    FourPlus,
}

impl ByteCategory {
    /// Number of categories.
    pub const COUNT: usize = 4;

    /// All categories in ascending order.
    pub const ALL: [Self; Self::COUNT] = [Self::One, Self::Two, Self::Three, Self::FourPlus];

    /// Category for the longest code point length of a cluster.
    ///
    /// Lengths of 4 and above map to [`ByteCategory::FourPlus`]. Zero means no
    /// code point was measured and is rejected.
    pub fn from_max_len(max_len: usize) -> Result<Self> {
        match max_len {
            0 => Err(Error::InvalidInput(
                "cannot categorize a cluster without code points".to_string(),
            )),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Ok(Self::FourPlus),
        }
    }

    /// Numeric value, 1 through 4.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::FourPlus => 4,
        }
    }

    /// Zero-based slot index, used for per-category tables.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Category for a numeric value 1 through 4.
    ///
    /// # Panics
    ///
    /// Panics when `value` is outside `1..=4`. Use [`ByteCategory::try_from`]
    /// for values that come from users.
    #[must_use]
    pub fn from_u8(value: u8) -> Self {
        match Self::try_from(value) {
            Ok(category) => category,
            Err(_) => panic!("byte category out of range: {value}"),
        }
    }

    /// Checkbox id used by the web front end for this category.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::One => "highlight-1byte-characters",
            Self::Two => "highlight-2byte-characters",
            Self::Three => "highlight-3byte-characters",
            Self::FourPlus => "highlight-4byte-characters",
        }
    }

    /// Category for a checkbox id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "1バイト文字",
            Self::Two => "2バイト文字",
            Self::Three => "3バイト文字",
            Self::FourPlus => "4バイト以上の文字",
        }
    }
}

impl TryFrom<u8> for ByteCategory {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::FourPlus),
            other => Err(Error::InvalidCategory(other.to_string())),
        }
    }
}

impl FromStr for ByteCategory {
    type Err = Error;

    /// Accepts `1`..`4`, `4+`, or a checkbox id.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed == "4+" {
            return Ok(Self::FourPlus);
        }
        if let Some(category) = Self::from_id(trimmed) {
            return Ok(category);
        }
        trimmed
            .parse::<u8>()
            .map_err(|_| Error::InvalidCategory(trimmed.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for ByteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FourPlus => f.write_str("4+"),
            other => write!(f, "{}", other.as_u8()),
        }
    }
}
