#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

//! Public API tests for component, DNS host and scheme-based validation.

use uricheck::{
    DnsError, EscapeError, HostKind, HostValidator, ValidationError, ValidatorOptions,
    decode_component, decode_percent_escape, uses_dns_validation, validate_component,
    validate_dns_host, validate_host,
};

fn dns_cause(host: &str) -> DnsError {
    match validate_dns_host(host) {
        Err(ValidationError::InvalidDnsName { cause, .. }) => cause,
        other => panic!("expected a DNS failure for {host:?}, got {other:?}"),
    }
}

#[test]
fn test_unreserved_and_sub_delims_are_valid() {
    assert!(validate_component("abcXYZ019-._~!$&'()*+,;=", &[]).is_ok());
}

#[test]
fn test_controls_and_space_are_invalid() {
    for input in ["a b", "\u{0}", "a\u{7f}", "line\nbreak", "\r"] {
        let err = validate_component(input, &[]).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidCharacter { .. }),
            "{input:?}: {err:?}"
        );
    }
}

#[test]
fn test_gen_delims_need_extra_runes() {
    for (input, ch) in [("a:b", ':'), ("a/b", '/'), ("a?b", '?'), ("a#b", '#')] {
        assert_eq!(
            validate_component(input, &[]),
            Err(ValidationError::InvalidCharacter { ch, index: 1 })
        );
        assert_eq!(validate_component(input, &[ch]), Ok(()));
    }
}

#[test]
fn test_decode_eacute() {
    let input = "%c3%a9";
    let (ch, consumed) = decode_percent_escape(&input.as_bytes()[1..]).unwrap();
    assert_eq!(ch, 'é');
    // Counted from the leading '%'
    assert_eq!(consumed + 1, 6);
}

#[test]
fn test_decode_malformed_escape() {
    assert_eq!(
        decode_percent_escape(&b"%zz"[1..]),
        Err(EscapeError::Malformed)
    );
}

#[test]
fn test_escape_errors_inside_component() {
    let err = validate_component("abc%2", &[]).unwrap_err();
    assert!(err.is_invalid_escaping());
    assert_eq!(err.escape_error(), Some(EscapeError::Malformed));
    assert_eq!(err.index(), 3);

    let err = validate_component("abc%", &[]).unwrap_err();
    assert_eq!(err.escape_error(), Some(EscapeError::Incomplete));
}

#[test]
fn test_dns_host_examples() {
    assert_eq!(validate_dns_host("example.com"), Ok(()));
    assert_eq!(dns_cause("-bad.com"), DnsError::LeadingNonLetter('-'));
    assert_eq!(dns_cause("bad-.com"), DnsError::SegmentEndsWithHyphen('-'));
    assert_eq!(dns_cause("a..b"), DnsError::EmptySegment);
    assert_eq!(
        dns_cause(&format!("{}.com", "a".repeat(64))),
        DnsError::SegmentTooLong
    );
    assert_eq!(dns_cause("123.45"), DnsError::HostIsNumeric);
}

#[test]
fn test_dns_host_length_boundary() {
    // 4 labels of 63 bytes and 3 dots make 255 bytes
    let label = "x".repeat(63);
    let host = [label.as_str(); 4].join(".");
    assert_eq!(host.len(), 255);
    assert_eq!(validate_dns_host(&host), Ok(()));

    let host = format!("{host}y");
    let err = validate_dns_host(&host).unwrap_err();
    assert_eq!(err.dns_error(), Some(DnsError::HostTooLong));
}

#[test]
fn test_dns_escape_errors_are_nested() {
    let err = validate_dns_host("exa%4").unwrap_err();
    assert!(err.is_invalid_dns_name());
    assert!(err.is_invalid_escaping());
    assert_eq!(
        err.dns_error(),
        Some(DnsError::InvalidEscaping(EscapeError::Malformed))
    );
}

#[test]
fn test_scheme_dispatch() {
    assert!(uses_dns_validation("https"));
    assert!(!uses_dns_validation("file"));
    assert!(!uses_dns_validation("made-up-scheme"));
}

#[test]
fn test_validate_host() {
    assert_eq!(validate_host("https", "www.rust-lang.org"), Ok(HostKind::DnsName));
    assert_eq!(validate_host("https", "10.1.2.3"), Ok(HostKind::Address));
    assert_eq!(validate_host("https", "[2001:db8::1]"), Ok(HostKind::Address));
    assert_eq!(validate_host("file", "server_01"), Ok(HostKind::RegisteredName));
    assert_eq!(
        validate_host("https", "server_01").unwrap_err().dns_error(),
        Some(DnsError::InvalidCharacter('_'))
    );
}

#[test]
fn test_validator_configuration() {
    let validator = HostValidator::new()
        .with_policy(|scheme: &str| scheme.starts_with("x-"))
        .with_options(ValidatorOptions::new().numeric_host_is_error(true));

    assert!(validator.uses_dns_validation("x-internal"));
    assert!(!validator.uses_dns_validation("https"));
    assert!(
        validator
            .validate_host("x-internal", "4711")
            .unwrap_err()
            .is_numeric_host()
    );
    assert_eq!(
        validator.validate_host("https", "4711"),
        Ok(HostKind::RegisteredName)
    );
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let validator = HostValidator::new();
    std::thread::scope(|s| {
        for host in ["a.example", "b.example", "c.example"] {
            s.spawn(move || {
                assert_eq!(validator.validate_host("http", host), Ok(HostKind::DnsName));
            });
        }
    });
}

#[test]
fn test_decode_component() {
    assert_eq!(decode_component("ex%61mple").unwrap(), "example");
    assert_eq!(decode_component("%E6%97%A5%E6%9C%AC").unwrap(), "日本");
    assert_eq!(
        decode_component("bad%c3"),
        Err(ValidationError::InvalidEscaping {
            index: 3,
            cause: EscapeError::MissingEscapeMark
        })
    );
}

#[test]
fn test_error_messages() {
    let err = validate_dns_host("-bad.com").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid host (DNS name) at byte 0: a segment in a DNS name must begin with a letter, found '-'"
    );

    let err = validate_component("a%zz", &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid percent-escaping sequence at byte 1: expected '%' to be followed by 2 hex digits"
    );
}

#[test]
fn test_only_decimal_digits_and_letters_in_dns_names() {
    assert_eq!(dns_cause("x\u{b2}"), DnsError::InvalidCharacter('\u{b2}'));
    assert_eq!(dns_cause("a\u{bd}b.com"), DnsError::InvalidCharacter('\u{bd}'));
    assert_eq!(dns_cause("\u{216b}x.com"), DnsError::LeadingNonLetter('\u{216b}'));
    assert!(validate_component("\u{bd}", &[]).is_err());
    assert_eq!(validate_dns_host("\u{967}\u{968}x.example"), Ok(()));
}

#[test]
fn test_signed_number_falls_back_to_address() {
    assert_eq!(validate_host("http", "+1"), Ok(HostKind::Address));
    assert_eq!(dns_cause("-1"), DnsError::HostIsNumeric);
}
