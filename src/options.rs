/// Configuration options for [`HostValidator`](crate::HostValidator).
///
/// # Default
///
/// No extra runes are accepted, and numeric hosts are reported as
/// [`HostKind::Address`](crate::HostKind::Address).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorOptions<'a> {
    /// Runes accepted in registered names on top of the RFC 3986
    /// `unreserved` and `sub-delims` sets.
    ///
    /// Has no effect on hosts validated as DNS names.
    ///
    /// # Default
    ///
    /// `&[]`
    pub accepted_extra: &'a [char],

    /// Whether a numeric host under a DNS scheme is an error.
    ///
    /// When `false`, a host such as `127.0.0.1` is accepted as
    /// [`HostKind::Address`](crate::HostKind::Address) and the caller is
    /// expected to parse it as an IP address. When `true`, the
    /// [`DnsError::HostIsNumeric`](crate::DnsError::HostIsNumeric) failure
    /// is returned as is.
    ///
    /// # Default
    ///
    /// `false`
    pub numeric_host_is_error: bool,
}

impl<'a> ValidatorOptions<'a> {
    pub const fn new() -> Self {
        Self {
            accepted_extra: &[],
            numeric_host_is_error: false,
        }
    }

    #[must_use]
    pub const fn accepted_extra(mut self, runes: &'a [char]) -> Self {
        self.accepted_extra = runes;
        self
    }

    #[must_use]
    pub const fn numeric_host_is_error(mut self, yes: bool) -> Self {
        self.numeric_host_is_error = yes;
        self
    }
}
