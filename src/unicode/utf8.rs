//! UTF-8 encoded length of code points.

/// Number of bytes `c` occupies when encoded as UTF-8.
///
/// Decided by numeric range: U+0000..=U+007F is 1 byte, U+0080..=U+07FF is 2,
/// U+0800..=U+FFFF is 3 and U+10000..=U+10FFFF is 4.
#[inline]
#[must_use]
pub const fn utf8_len(c: char) -> u8 {
    match c as u32 {
        0x0000..=0x007F => 1,
        0x0080..=0x07FF => 2,
        0x0800..=0xFFFF => 3,
        _ => 4,
    }
}

/// UTF-8 length of every code point in `s`, in order.
///
/// One entry per scalar value; astral characters count once.
pub fn code_point_lengths(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().map(utf8_len)
}
