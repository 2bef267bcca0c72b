use crate::character_sets::{is_hex, unhex};
use crate::compat::Cow;
use crate::error::{EscapeError, Result, ValidationError};
use crate::unicode::utf8::next_rune;

const TWO_BYTES_LEAD: u8 = 0b1100_0000;
const THREE_BYTES_LEAD: u8 = 0b1110_0000;
const FOUR_BYTES_LEAD: u8 = 0b1111_0000;

/// Number of escaped octets announced by the first decoded octet
#[inline]
const fn escaped_len(lead: u8) -> usize {
    if lead < TWO_BYTES_LEAD {
        1
    } else if lead < THREE_BYTES_LEAD {
        2
    } else if lead < FOUR_BYTES_LEAD {
        3
    } else {
        4
    }
}

/// Decode the two hex digits at the start of `s` into an octet
#[inline]
fn unescape_octet(s: &[u8]) -> core::result::Result<u8, EscapeError> {
    match s {
        [hi, lo, ..] if is_hex(*hi) && is_hex(*lo) => Ok((unhex(*hi) << 4) | unhex(*lo)),
        _ => Err(EscapeError::Malformed),
    }
}

/// Decode one percent-encoded code point.
///
/// `remainder` starts right after a `%`. A lead octet of `0xC0` or above
/// announces a multi-byte UTF-8 sequence, whose continuation octets must
/// each be escaped as well (`%c3%a9` for `é`).
///
/// Returns the rune and the number of bytes consumed from `remainder`:
/// the two hex digits, plus three bytes for every continuation `%XX`.
///
/// # Errors
///
/// - [`EscapeError::Malformed`] if an octet is not two hex digits
/// - [`EscapeError::MissingEscapeMark`] if a continuation octet is not escaped
/// - [`EscapeError::InvalidRune`] if the octets are not valid UTF-8
pub fn decode_percent_escape(remainder: &[u8]) -> core::result::Result<(char, usize), EscapeError> {
    let mut code_point = [0u8; 4];
    code_point[0] = unescape_octet(remainder)?;
    let len = escaped_len(code_point[0]);
    let mut offset = 2;

    for octet in code_point.iter_mut().take(len).skip(1) {
        if remainder.get(offset) != Some(&b'%') {
            return Err(EscapeError::MissingEscapeMark);
        }
        offset += 1;
        *octet = unescape_octet(remainder.get(offset..).unwrap_or_default())?;
        offset += 2;
    }

    let ch = core::str::from_utf8(&code_point[..len])
        .ok()
        .and_then(|s| s.chars().next())
        .ok_or(EscapeError::InvalidRune)?;

    Ok((ch, offset))
}

/// A rune read by the scanners, either raw or percent-decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rune {
    pub ch: char,
    /// Offset of the byte following the rune (or its escape sequence)
    pub next: usize,
    pub escaped: bool,
}

/// Failure to read a rune, before the caller attaches its own context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadError {
    /// Raw bytes are not valid UTF-8
    Utf8,
    Escape(EscapeError),
}

/// Read the rune at `bytes[i]`, decoding a `%` escape chain if one starts there
pub(crate) fn read_rune(bytes: &[u8], i: usize) -> core::result::Result<Rune, ReadError> {
    let (ch, size) = next_rune(bytes, i).ok_or(ReadError::Utf8)?;
    let next = i + size;
    if ch != '%' {
        return Ok(Rune {
            ch,
            next,
            escaped: false,
        });
    }

    let remainder = bytes.get(next..).unwrap_or_default();
    if remainder.is_empty() {
        return Err(ReadError::Escape(EscapeError::Incomplete));
    }
    let (ch, consumed) = decode_percent_escape(remainder).map_err(ReadError::Escape)?;
    Ok(Rune {
        ch,
        next: next + consumed,
        escaped: true,
    })
}

/// Check every escape sequence of `input`, without looking at other characters
fn check_escapes(input: &[u8]) -> Result<()> {
    let mut i = 0;
    while let Some(pos) = memchr::memchr(b'%', input.get(i..).unwrap_or_default()) {
        let index = i + pos;
        match read_rune(input, index) {
            Ok(rune) => i = rune.next,
            Err(ReadError::Escape(cause)) => {
                return Err(ValidationError::InvalidEscaping { index, cause });
            }
            Err(ReadError::Utf8) => return Err(ValidationError::InvalidRune { index }),
        }
    }
    Ok(())
}

/// Percent-decode a component.
///
/// Every escape must decode to a complete UTF-8 code point, as the
/// validators require. Borrows the input when it contains no `%`.
pub fn decode_component(input: &str) -> Result<Cow<'_, str>> {
    if memchr::memchr(b'%', input.as_bytes()).is_none() {
        return Ok(Cow::Borrowed(input));
    }

    check_escapes(input.as_bytes())?;

    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .map_err(|_| ValidationError::InvalidEscaping {
            index: 0,
            cause: EscapeError::InvalidRune,
        })
}
