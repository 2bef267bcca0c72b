//! Validation of URI components (RFC 3986) and DNS host names (RFC 1035).
//!
//! Every function here is a pure predicate over its input: nothing is
//! rewritten, and no state is shared between calls.
//!
//! ```
//! use uricheck::{DnsError, HostKind, validate_dns_host, validate_host};
//!
//! assert!(validate_dns_host("example.com").is_ok());
//! assert_eq!(
//!     validate_dns_host("bad-.com").unwrap_err().dns_error(),
//!     Some(DnsError::SegmentEndsWithHyphen('-'))
//! );
//!
//! // Numeric hosts are left to an IP address parser
//! assert_eq!(validate_host("https", "192.168.0.1"), Ok(HostKind::Address));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod options;
mod scheme;
mod types;
mod unicode;
mod validator;

// Public API
pub use error::{DnsError, EscapeError, ValidationError};
pub use options::ValidatorOptions;
pub use scheme::{IanaSchemes, SchemePolicy, uses_dns_validation};
pub use types::HostKind;
pub use unicode::percent_decode::{decode_component, decode_percent_escape};
pub use validator::{
    HostValidator, MAX_HOST_LENGTH, MAX_LABEL_LENGTH, validate_component, validate_dns_host,
    validate_host, validate_registered_name,
};

pub type Result<T> = core::result::Result<T, ValidationError>;
