/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    /// Any other scheme, or none at all
    #[default]
    Other,
}

impl SchemeType {
    /// Check if this is one of the well-known network schemes
    pub fn is_well_known(self) -> bool {
        self != Self::Other
    }

    /// Well-known schemes must carry a non-empty host
    pub fn requires_host(self) -> bool {
        self.is_well_known()
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Other => None,
        }
    }

    /// Canonical lowercase name, `None` for [`SchemeType::Other`]
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Http => Some("http"),
            Self::Https => Some("https"),
            Self::Ws => Some("ws"),
            Self::Wss => Some("wss"),
            Self::Other => None,
        }
    }
}

/// Scheme of a parsed URL.
///
/// `Other` keeps the raw bytes exactly as they appeared in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme<'a> {
    Http,
    Https,
    Ws,
    Wss,
    Other(&'a [u8]),
}

impl<'a> Scheme<'a> {
    pub(crate) fn new(scheme_type: SchemeType, raw: &'a [u8]) -> Self {
        match scheme_type {
            SchemeType::Http => Self::Http,
            SchemeType::Https => Self::Https,
            SchemeType::Ws => Self::Ws,
            SchemeType::Wss => Self::Wss,
            SchemeType::Other => Self::Other(raw),
        }
    }

    pub fn scheme_type(self) -> SchemeType {
        match self {
            Self::Http => SchemeType::Http,
            Self::Https => SchemeType::Https,
            Self::Ws => SchemeType::Ws,
            Self::Wss => SchemeType::Wss,
            Self::Other(_) => SchemeType::Other,
        }
    }

    /// Scheme bytes; lowercase for well-known schemes, raw for others
    pub fn as_bytes(self) -> &'a [u8] {
        match self {
            Self::Other(raw) => raw,
            _ => self.scheme_type().as_str().map_or(&[], str::as_bytes),
        }
    }

    pub fn default_port(self) -> Option<u16> {
        self.scheme_type().default_port()
    }
}

/// Shape of a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// Registered name, e.g. `example.com`
    RegName,
    /// Dotted-decimal IPv4 literal
    Ipv4,
    /// Bracketed IPv6 literal
    Ipv6,
}
