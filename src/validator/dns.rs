//! DNS host name validation.
//!
//! ```text
//! <domain>      ::= <subdomain> | " "
//! <subdomain>   ::= <label> | <subdomain> "." <label>
//! <label>       ::= <letter> [ [ <ldh-str> ] <let-dig> ]
//! <ldh-str>     ::= <let-dig-hyp> | <let-dig-hyp> <ldh-str>
//! <let-dig-hyp> ::= <let-dig> | "-"
//! <let-dig>     ::= <letter> | <digit>
//! ```
//!
//! Ref: <https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.1>
//!
//! As allowed by RFC 1123, a label may also start with a digit, as long as
//! the host is not made only of digits.

use crate::character_sets::{is_digit, is_let_dig, is_let_dig_hyp, is_letter};
use crate::checkers::is_numeric;
use crate::error::{DnsError, Result, ValidationError};
use crate::unicode::percent_decode::{ReadError, Rune, read_rune};

/// Maximum length of a host name, in bytes of the (still escaped) input
pub const MAX_HOST_LENGTH: usize = 255;

/// Maximum length of a label, in bytes of the (still escaped) input
pub const MAX_LABEL_LENGTH: usize = 63;

#[inline]
fn dns_error(index: usize, cause: DnsError) -> ValidationError {
    ValidationError::InvalidDnsName { index, cause }
}

#[inline]
fn read_label_rune(host: &[u8], i: usize) -> Result<Rune> {
    read_rune(host, i).map_err(|e| match e {
        ReadError::Utf8 => dns_error(i, DnsError::InvalidRune),
        ReadError::Escape(cause) => dns_error(i, DnsError::InvalidEscaping(cause)),
    })
}

/// Validate a host as an RFC 1035 domain name.
///
/// Labels may contain percent-encoded runes, and may be separated by an
/// escaped dot (`%2e`). Lengths are counted on the input as given, so the
/// same name may pass or fail depending on how it is escaped.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDnsName`] with the failing
/// [`DnsError`]. A host made only of digits fails with
/// [`DnsError::HostIsNumeric`], which tells the caller to parse it as an IP
/// address instead.
pub fn validate_dns_host(host: impl AsRef<[u8]>) -> Result<()> {
    let host = host.as_ref();
    if host.len() > MAX_HOST_LENGTH {
        return Err(dns_error(MAX_HOST_LENGTH, DnsError::HostTooLong));
    }
    if host.is_empty() {
        return Err(dns_error(0, DnsError::EmptySegment));
    }

    let mut start = 0;
    while let Some(next) = validate_label(host, start)? {
        start = next;
    }

    Ok(())
}

/// Validate the label beginning at `host[start]`.
/// Returns the start of the next label, or None when this was the last one.
fn validate_label(host: &[u8], start: usize) -> Result<Option<usize>> {
    let first = validate_first_rune(host, start)?;
    let mut last = first.ch;
    let mut i = first.next;
    let mut has_body = false;

    while i < host.len() {
        let index = i;
        let rune = read_label_rune(host, i)?;
        has_body = true;
        i = rune.next;

        if rune.ch == '.' {
            // End of label, possibly with an escaped "."
            if i >= host.len() {
                return Err(dns_error(index, DnsError::EmptySegment));
            }
            if !is_let_dig(last) {
                return Err(dns_error(index, DnsError::SegmentEndsWithHyphen(last)));
            }
            return Ok(Some(i));
        }

        if i - start > MAX_LABEL_LENGTH {
            return Err(dns_error(start, DnsError::SegmentTooLong));
        }

        if !is_let_dig_hyp(rune.ch) {
            return Err(dns_error(index, DnsError::InvalidCharacter(rune.ch)));
        }

        last = rune.ch;
    }

    if has_body && !is_let_dig(last) {
        return Err(dns_error(i, DnsError::SegmentEndsWithHyphen(last)));
    }

    Ok(None)
}

fn validate_first_rune(host: &[u8], start: usize) -> Result<Rune> {
    let rune = read_label_rune(host, start)?;
    if !rune.escaped && rune.ch == '.' {
        return Err(dns_error(start, DnsError::EmptySegment));
    }

    let has_more = rune.next < host.len();

    // A number here, optionally signed, means the host is an IP address candidate
    let numeric = match rune.ch {
        '0'..='9' => digits_only(host, rune.next),
        '+' | '-' => has_more && digits_only(host, rune.next),
        _ => false,
    };
    if numeric {
        return Err(dns_error(start, DnsError::HostIsNumeric));
    }

    if !is_letter(rune.ch) && !(is_digit(rune.ch) && has_more) {
        return Err(dns_error(start, DnsError::LeadingNonLetter(rune.ch)));
    }

    Ok(rune)
}

/// Check if every rune of `host[from..]`, once decoded, is an ASCII digit
fn digits_only(host: &[u8], from: usize) -> bool {
    let rest = host.get(from..).unwrap_or_default();
    if memchr::memchr(b'%', rest).is_none() {
        return rest.is_empty() || is_numeric(rest);
    }

    let mut i = from;
    while i < host.len() {
        match read_rune(host, i) {
            Ok(rune) if rune.ch.is_ascii_digit() => i = rune.next,
            _ => return false,
        }
    }
    true
}
