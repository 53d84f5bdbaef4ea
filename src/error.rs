/// Kinds of failure reported by the URL parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Zero-length input
    EmptyInput,
    /// Authority present but host empty for a scheme that requires one
    MissingHost,
    /// `[` without a matching `]` before the authority ends
    UnterminatedIpv6Literal,
    /// Non-digit byte in the port region, or a value above 65535
    InvalidPort,
    /// Control byte or space where the byte policy forbids it
    IllegalByte,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::MissingHost => "Missing host",
            Self::UnterminatedIpv6Literal => "Unterminated IPv6 literal",
            Self::InvalidPort => "Invalid port",
            Self::IllegalByte => "Illegal byte",
        };
        f.write_str(msg)
    }
}

/// Error returned when the input is not a valid URL.
///
/// Carries the kind of failure and the byte offset of the offending byte in
/// the input. For [`ErrorKind::EmptyInput`] and for a host missing at the end
/// of the input, the offset equals the input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
}

impl ParseError {
    pub(crate) const fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// What went wrong
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset of the offending byte
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
