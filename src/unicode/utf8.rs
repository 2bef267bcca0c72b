//! Rune decoding over raw bytes.

/// Width of the UTF-8 sequence introduced by `lead`, or 0 if `lead` cannot start one
#[inline]
pub const fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decode the rune starting at `bytes[i]`.
/// Returns the rune and its width, or None for malformed UTF-8 (including
/// a truncated sequence at the end of input).
#[inline]
pub fn next_rune(bytes: &[u8], i: usize) -> Option<(char, usize)> {
    let lead = *bytes.get(i)?;
    if lead.is_ascii() {
        return Some((lead as char, 1));
    }

    let width = utf8_width(lead);
    if width == 0 {
        return None;
    }
    let seq = bytes.get(i..i + width)?;
    // Overlong forms and encoded surrogates fail here
    let ch = core::str::from_utf8(seq).ok()?.chars().next()?;
    Some((ch, width))
}
