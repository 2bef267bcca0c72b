/// Check if the input is made only of ASCII digits.
/// An empty input is not numeric.
pub fn is_numeric(input: &[u8]) -> bool {
    !input.is_empty() && input.iter().all(u8::is_ascii_digit)
}

/// Check if a host is an RFC 3986 `IP-literal` (`[v6]` or `[vFuture]`).
/// Only the brackets are looked at: parsing the address belongs to the caller.
pub fn is_ip_literal(host: &[u8]) -> bool {
    host.len() >= 2 && host.first() == Some(&b'[') && host.last() == Some(&b']')
}
