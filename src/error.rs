use core::fmt;

/// Errors raised while decoding a percent-encoded sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeError {
    /// A `%` at the end of the input, with nothing after it
    Incomplete,
    /// A `%` not followed by two hexadecimal digits
    Malformed,
    /// A multi-byte sequence lacks the `%` of a continuation octet
    MissingEscapeMark,
    /// The decoded octets do not form a valid UTF-8 code point
    InvalidRune,
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Incomplete => "incomplete escape sequence",
            Self::Malformed => "expected '%' to be followed by 2 hex digits",
            Self::MissingEscapeMark => "expected a '%' escape character",
            Self::InvalidRune => "the escaped code points do not add up to a valid rune",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EscapeError {}

/// Why a host was rejected as an RFC 1035 domain name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsError {
    /// The host is longer than 255 bytes
    HostTooLong,
    /// The host is empty, or contains an empty label (`a..b`, `a.`, `.a`)
    EmptySegment,
    /// A label starts with something other than a letter
    LeadingNonLetter(char),
    /// The host is only digits and should be parsed as an IP address instead
    HostIsNumeric,
    /// A label is longer than 63 bytes
    SegmentTooLong,
    /// A label ends with something other than a letter or a digit
    SegmentEndsWithHyphen(char),
    /// A label contains something other than letters, digits or `-`
    InvalidCharacter(char),
    /// Raw bytes that are not valid UTF-8
    InvalidRune,
    /// A percent-encoded sequence failed to decode
    InvalidEscaping(EscapeError),
}

impl fmt::Display for DnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostTooLong => f.write_str("hostname is longer than the allowed 255 bytes"),
            Self::EmptySegment => f.write_str("a DNS name should not contain an empty segment"),
            Self::LeadingNonLetter(ch) => {
                write!(f, "a segment in a DNS name must begin with a letter, found {ch:?}")
            }
            Self::HostIsNumeric => f.write_str("hostname cannot just be a number"),
            Self::SegmentTooLong => {
                f.write_str("a segment in a DNS name should not be longer than 63 bytes")
            }
            Self::SegmentEndsWithHyphen(ch) => write!(
                f,
                "a segment in a DNS name must end with a letter or a digit, found {ch:?}"
            ),
            Self::InvalidCharacter(ch) => write!(
                f,
                "a segment in a DNS name must contain only letters, digits or '-', found {ch:?}"
            ),
            Self::InvalidRune => f.write_str("invalid UTF-8 rune"),
            Self::InvalidEscaping(cause) => write!(f, "invalid percent-escaping sequence: {cause}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DnsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEscaping(cause) => Some(cause),
            _ => None,
        }
    }
}

/// Errors that can occur while validating a URI component
///
/// Every variant carries the byte offset in the validated input where the
/// problem was found. Composite variants wrap their root cause so that
/// callers can match either the category or the specific kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Malformed raw UTF-8
    InvalidRune { index: usize },
    /// A percent-encoded sequence failed to decode; `index` points to its `%`
    InvalidEscaping { index: usize, cause: EscapeError },
    /// A rune outside the allowed character set
    InvalidCharacter { ch: char, index: usize },
    /// The host is not a valid DNS name
    InvalidDnsName { index: usize, cause: DnsError },
}

impl ValidationError {
    /// Byte offset in the input where validation failed
    pub fn index(&self) -> usize {
        match *self {
            Self::InvalidRune { index }
            | Self::InvalidEscaping { index, .. }
            | Self::InvalidCharacter { index, .. }
            | Self::InvalidDnsName { index, .. } => index,
        }
    }

    /// The escaping failure behind this error, including one nested in a DNS failure
    pub fn escape_error(&self) -> Option<EscapeError> {
        match *self {
            Self::InvalidEscaping { cause, .. }
            | Self::InvalidDnsName {
                cause: DnsError::InvalidEscaping(cause),
                ..
            } => Some(cause),
            _ => None,
        }
    }

    /// The DNS-specific failure, if this is an [`ValidationError::InvalidDnsName`]
    pub fn dns_error(&self) -> Option<DnsError> {
        match *self {
            Self::InvalidDnsName { cause, .. } => Some(cause),
            _ => None,
        }
    }

    pub fn is_invalid_escaping(&self) -> bool {
        self.escape_error().is_some()
    }

    pub fn is_invalid_dns_name(&self) -> bool {
        matches!(self, Self::InvalidDnsName { .. })
    }

    /// True when the host was rejected only because it is numeric
    pub fn is_numeric_host(&self) -> bool {
        self.dns_error() == Some(DnsError::HostIsNumeric)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRune { index } => write!(f, "invalid UTF-8 rune at byte {index}"),
            Self::InvalidEscaping { index, cause } => {
                write!(f, "invalid percent-escaping sequence at byte {index}: {cause}")
            }
            Self::InvalidCharacter { ch, index } => write!(
                f,
                "contains an invalid character: '{}' ({ch:?}) at byte {index}",
                Codepoint(*ch)
            ),
            Self::InvalidDnsName { index, cause } => {
                write!(f, "invalid host (DNS name) at byte {index}: {cause}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEscaping { cause, .. } => Some(cause),
            Self::InvalidDnsName { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// `U+XXXX` notation
struct Codepoint(char);

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", u32::from(self.0))
    }
}

/// Result type for validation operations
pub type Result<T> = core::result::Result<T, ValidationError>;
