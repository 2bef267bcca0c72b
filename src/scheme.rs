/// Decides, per URI scheme, how the host of a URI is validated.
///
/// `true` means the host must be a DNS name (RFC 1035), `false` means the
/// generic RFC 3986 registered name syntax applies. Any `Fn(&str) -> bool`
/// is a policy, so an application can plug in its own scheme registry:
///
/// ```
/// use uricheck::{HostValidator, SchemePolicy, IanaSchemes};
///
/// let validator = HostValidator::new()
///     .with_policy(|scheme: &str| scheme == "myproto" || IanaSchemes.uses_dns_validation(scheme));
/// assert!(validator.uses_dns_validation("myproto"));
/// ```
pub trait SchemePolicy {
    fn uses_dns_validation(&self, scheme: &str) -> bool;
}

impl<F> SchemePolicy for F
where
    F: Fn(&str) -> bool,
{
    fn uses_dns_validation(&self, scheme: &str) -> bool {
        self(scheme)
    }
}

/// Default policy, built from the IANA URI scheme registry.
/// See <https://www.iana.org/assignments/uri-schemes/uri-schemes.xhtml>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IanaSchemes;

impl SchemePolicy for IanaSchemes {
    fn uses_dns_validation(&self, scheme: &str) -> bool {
        uses_dns_validation(scheme)
    }
}

/// Longer than any scheme in the table
const MAX_KNOWN_SCHEME_LEN: usize = 16;

/// Check if the host of a URI with this scheme is validated as a DNS name.
/// Schemes are compared case-insensitively. `file` and unknown schemes use
/// the generic registered name syntax.
pub fn uses_dns_validation(scheme: &str) -> bool {
    let bytes = scheme.as_bytes();

    // Most common schemes first
    match bytes {
        b"https" | b"http" => return true,
        b"file" => return false,
        _ => {}
    }

    if bytes.is_empty() || bytes.len() > MAX_KNOWN_SCHEME_LEN {
        return false;
    }
    let mut buf = [0u8; MAX_KNOWN_SCHEME_LEN];
    let lower = &mut buf[..bytes.len()];
    lower.copy_from_slice(bytes);
    lower.make_ascii_lowercase();

    matches!(
        &*lower,
        b"http"
            | b"https"
            | b"aaa"
            | b"aaas"
            | b"acap"
            | b"acct"
            | b"cap"
            | b"cid"
            | b"coap"
            | b"coaps"
            | b"coap+tcp"
            | b"coap+ws"
            | b"coaps+tcp"
            | b"coaps+ws"
            | b"dav"
            | b"dict"
            | b"dns"
            | b"dntp"
            | b"finger"
            | b"ftp"
            | b"git"
            | b"gopher"
            | b"h323"
            | b"iax"
            | b"icap"
            | b"im"
            | b"imap"
            | b"ipp"
            | b"ipps"
            | b"irc"
            | b"irc6"
            | b"ircs"
            | b"jms"
            | b"ldap"
            | b"mailto"
            | b"mid"
            | b"msrp"
            | b"msrps"
            | b"nfs"
            | b"nntp"
            | b"ntp"
            | b"postgresql"
            | b"radius"
            | b"redis"
            | b"rmi"
            | b"rtsp"
            | b"rtsps"
            | b"rtspu"
            | b"rsync"
            | b"sftp"
            | b"skype"
            | b"smtp"
            | b"snmp"
            | b"soap"
            | b"ssh"
            | b"steam"
            | b"svn"
            | b"tcp"
            | b"telnet"
            | b"udp"
            | b"vnc"
            | b"wais"
            | b"ws"
            | b"wss"
    )
}
