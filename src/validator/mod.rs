mod component;
mod dns;

pub use component::{validate_component, validate_registered_name};
pub use dns::{MAX_HOST_LENGTH, MAX_LABEL_LENGTH, validate_dns_host};

use crate::checkers::is_ip_literal;
use crate::error::{DnsError, Result, ValidationError};
use crate::options::ValidatorOptions;
use crate::scheme::{IanaSchemes, SchemePolicy};
use crate::types::HostKind;

/// Validates the host of a URI according to its scheme.
///
/// The [`SchemePolicy`] chooses between DNS name validation and the generic
/// RFC 3986 registered name syntax. A validator holds no mutable state and
/// can be shared freely between threads when its policy can.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostValidator<'a, P = IanaSchemes> {
    policy: P,
    options: ValidatorOptions<'a>,
}

impl HostValidator<'static, IanaSchemes> {
    /// A validator using the IANA scheme table and default options
    pub const fn new() -> Self {
        Self {
            policy: IanaSchemes,
            options: ValidatorOptions::new(),
        }
    }
}

impl<'a, P: SchemePolicy> HostValidator<'a, P> {
    /// Replace the scheme policy
    pub fn with_policy<Q: SchemePolicy>(self, policy: Q) -> HostValidator<'a, Q> {
        HostValidator {
            policy,
            options: self.options,
        }
    }

    /// Replace the options
    pub fn with_options<'b>(self, options: ValidatorOptions<'b>) -> HostValidator<'b, P> {
        HostValidator {
            policy: self.policy,
            options,
        }
    }

    /// Options in use
    pub fn options(&self) -> &ValidatorOptions<'a> {
        &self.options
    }

    /// Scheme policy in use
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Check if hosts under `scheme` are validated as DNS names
    pub fn uses_dns_validation(&self, scheme: &str) -> bool {
        self.policy.uses_dns_validation(scheme)
    }

    /// Validate `host` as the host of a URI with the given scheme.
    ///
    /// Returns how the host was recognized. [`HostKind::Address`] means the
    /// host is an IP literal (`[...]`) or, under a DNS scheme, a number; the
    /// caller still has to parse it as an address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDnsName`] for a bad host under a DNS
    /// scheme, or the errors of [`validate_component`] otherwise.
    pub fn validate_host(&self, scheme: &str, host: impl AsRef<[u8]>) -> Result<HostKind> {
        let host = host.as_ref();
        if is_ip_literal(host) {
            tracing::trace!(scheme, "host is an IP literal");
            return Ok(HostKind::Address);
        }

        let dns = self.uses_dns_validation(scheme);
        tracing::debug!(scheme, dns, "validating host");

        let result = if dns {
            self.validate_dns(host)
        } else {
            validate_component(host, self.options.accepted_extra).map(|()| HostKind::RegisteredName)
        };

        if let Err(err) = &result {
            tracing::trace!(scheme, error = %err, "host rejected");
        }
        result
    }

    fn validate_dns(&self, host: &[u8]) -> Result<HostKind> {
        match validate_dns_host(host) {
            Ok(()) => Ok(HostKind::DnsName),
            Err(ValidationError::InvalidDnsName {
                cause: DnsError::HostIsNumeric,
                ..
            }) if !self.options.numeric_host_is_error => Ok(HostKind::Address),
            Err(err) => Err(err),
        }
    }
}

/// Validate a host with the default [`HostValidator`]
pub fn validate_host(scheme: &str, host: impl AsRef<[u8]>) -> Result<HostKind> {
    HostValidator::new().validate_host(scheme, host)
}
