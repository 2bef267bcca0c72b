/// How a host was accepted by [`HostValidator::validate_host`](crate::HostValidator::validate_host)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// A valid RFC 1035 domain name
    DnsName,
    /// A valid RFC 3986 registered name
    RegisteredName,
    /// A numeric host or an IP literal: the caller must parse it as an IPv4
    /// or IPv6 address
    Address,
}

impl HostKind {
    /// Check if the host still has to go through address parsing
    pub fn needs_address_parse(self) -> bool {
        self == Self::Address
    }
}
