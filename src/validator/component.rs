use crate::character_sets::{is_component_byte, is_component_char};
use crate::error::{Result, ValidationError};
use crate::unicode::percent_decode::{ReadError, read_rune};

/// Validate a URI component against the RFC 3986 grammar:
///
/// ```text
/// unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
/// sub-delims  = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="
/// ```
///
/// Percent-encoded sequences are accepted as long as they decode to a valid
/// UTF-8 code point. `accepted_extra` lists runes permitted on top of the
/// default set, e.g. `:` and `@` for a path segment.
///
/// # Errors
///
/// - [`ValidationError::InvalidRune`] on malformed raw UTF-8
/// - [`ValidationError::InvalidEscaping`] on a bad escape sequence
/// - [`ValidationError::InvalidCharacter`] on a rune outside the allowed set
pub fn validate_component(input: impl AsRef<[u8]>, accepted_extra: &[char]) -> Result<()> {
    let bytes = input.as_ref();

    // Fast path: plain ASCII made of allowed bytes only ('%' is not one)
    if bytes.iter().all(|&b| is_component_byte(b)) {
        return Ok(());
    }

    let mut i = 0;
    while i < bytes.len() {
        let index = i;
        let rune = read_rune(bytes, i).map_err(|e| match e {
            ReadError::Utf8 => ValidationError::InvalidRune { index },
            ReadError::Escape(cause) => ValidationError::InvalidEscaping { index, cause },
        })?;
        i = rune.next;

        if !rune.escaped && !is_component_char(rune.ch, accepted_extra) {
            return Err(ValidationError::InvalidCharacter {
                ch: rune.ch,
                index,
            });
        }
    }

    Ok(())
}

/// Validate an RFC 3986 `reg-name`: unreserved, sub-delims and
/// percent-encoded octets only.
pub fn validate_registered_name(host: impl AsRef<[u8]>) -> Result<()> {
    validate_component(host, &[])
}
