use crate::builder::UrlBuilder;
use crate::character_sets::{is_authority_end, is_scheme_byte};
use crate::compat::{String, Vec};
use crate::error::{ErrorKind, ParseError, Result};
use crate::options::ParseOptions;
use crate::parsed_url::{Lossy, ParsedUrl};
use crate::parser::parse_components;
use crate::query::QueryPairs;
use crate::types::{HostKind, Scheme, SchemeType};
use crate::url_components::UrlComponents;
use core::net::IpAddr;

/// A URL that owns its bytes.
///
/// Same accessors as [`ParsedUrl`]; use it when a URL has to outlive the
/// buffer it was parsed from.
///
/// # Examples
///
/// ```
/// use urlspan::OwnedUrl;
///
/// let url = {
///     let request_line = b"https://example.com/path/to/resource?query=value".to_vec();
///     urlspan::parse(&request_line).unwrap().to_owned_url()
/// };
/// assert_eq!(url.host(), Some(&b"example.com"[..]));
/// assert_eq!(url.query(), Some(&b"query=value"[..]));
/// ```
#[derive(Clone)]
pub struct OwnedUrl {
    buffer: Vec<u8>,
    components: UrlComponents,
}

impl OwnedUrl {
    /// Parse owned bytes in strict mode
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid URL.
    pub fn parse(input: impl Into<Vec<u8>>) -> Result<Self> {
        Self::parse_with(input, ParseOptions::strict())
    }

    /// Parse owned bytes with explicit options
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid URL.
    pub fn parse_with(input: impl Into<Vec<u8>>, options: ParseOptions) -> Result<Self> {
        let buffer = input.into();
        let components = parse_components(&buffer, options)?;
        Ok(Self::from_parts(buffer, components))
    }

    pub(crate) fn from_parts(buffer: Vec<u8>, components: UrlComponents) -> Self {
        Self { buffer, components }
    }

    /// Borrowed view over this URL
    pub fn as_parsed(&self) -> ParsedUrl<'_> {
        ParsedUrl::from_parts(&self.buffer, self.components)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn components(&self) -> &UrlComponents {
        &self.components
    }

    pub fn scheme(&self) -> Option<Scheme<'_>> {
        self.as_parsed().scheme()
    }

    pub fn scheme_type(&self) -> SchemeType {
        self.components.scheme_type
    }

    pub fn userinfo(&self) -> Option<&[u8]> {
        self.as_parsed().userinfo()
    }

    pub fn host(&self) -> Option<&[u8]> {
        self.as_parsed().host()
    }

    pub fn host_is_ipv6(&self) -> bool {
        self.components.host_is_ipv6
    }

    pub fn host_kind(&self) -> Option<HostKind> {
        self.as_parsed().host_kind()
    }

    pub fn host_ip(&self) -> Option<IpAddr> {
        self.as_parsed().host_ip()
    }

    pub fn port(&self) -> Option<u16> {
        self.components.port_number
    }

    pub fn port_or_default(&self) -> Option<u16> {
        self.components.port_or_default()
    }

    pub fn has_explicit_port(&self) -> bool {
        self.components.port_number.is_some()
    }

    pub fn path(&self) -> &[u8] {
        self.as_parsed().path()
    }

    pub fn query(&self) -> Option<&[u8]> {
        self.as_parsed().query()
    }

    pub fn query_pairs(&self) -> QueryPairs<'_> {
        self.as_parsed().query_pairs()
    }

    pub fn fragment(&self) -> Option<&[u8]> {
        self.as_parsed().fragment()
    }

    pub fn is_absolute(&self) -> bool {
        self.components.is_absolute()
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.as_parsed().serialize()
    }

    #[must_use]
    pub fn normalize(&self) -> Self {
        self.as_parsed().normalize()
    }

    pub fn base_url(&self) -> Option<Self> {
        self.as_parsed().base_url()
    }

    /// Append a relative reference to this URL's path.
    ///
    /// The `/` at the seam is collapsed to one; query and fragment come from
    /// `other`, or from `self` when `other` has no path. An absolute `other`
    /// is returned as is. This concatenates paths; it does not resolve `.`
    /// or `..` segments.
    ///
    /// ```
    /// use urlspan::OwnedUrl;
    ///
    /// let base = OwnedUrl::parse("https://example.com/api/").unwrap();
    /// let joined = base.join(&urlspan::parse("/users?active=1").unwrap());
    /// assert_eq!(joined.as_bytes(), b"https://example.com/api/users?active=1");
    /// ```
    #[must_use]
    pub fn join(&self, other: &ParsedUrl<'_>) -> Self {
        if other.is_absolute() {
            return other.to_owned_url();
        }

        let base = self.as_parsed();
        let base_path = self.components.path.slice(&self.buffer);
        let other_path = other.components().path.slice(other.as_bytes());

        let mut builder = UrlBuilder::with_capacity(self.buffer.len() + other.as_bytes().len() + 1);
        if let (Some(scheme), Some(host)) = (self.components.scheme, base.host()) {
            builder
                .scheme(scheme.slice(&self.buffer), self.components.scheme_type)
                .authority();
            if let Some(userinfo) = base.userinfo() {
                builder.userinfo(userinfo, None);
            }
            builder.host(host, self.components.host_is_ipv6);
            if let Some(port) = self.components.port_number {
                builder.port(port);
            }
        }

        // An empty path only overrides what it carries: `?q` keeps the base
        // path, `#f` also keeps the base query. The empty query implied by a
        // fragment-only reference carries nothing.
        let fragment_only = other.as_bytes().first() == Some(&b'#');
        let carries_query = other.query().is_some() && !fragment_only;
        let query_source = if other_path.is_empty() {
            builder.path(base_path, None);
            if carries_query { other } else { &base }
        } else if base_path.is_empty() && !self.is_absolute() {
            builder.path(other_path, None);
            other
        } else {
            let mut path = Vec::with_capacity(base_path.len() + other_path.len() + 1);
            path.extend_from_slice(trim_end_slashes(base_path));
            path.push(b'/');
            path.extend_from_slice(trim_start_slashes(other_path));
            builder.path(&path, None);
            other
        };

        if let Some(query) = query_source.query() {
            builder.query(query, None);
        }
        let fragment = match other.fragment() {
            Some(fragment) => Some(fragment),
            None if other_path.is_empty() && !carries_query => base.fragment(),
            None => None,
        };
        if let Some(fragment) = fragment {
            builder.fragment(fragment, None);
        }
        builder.finish()
    }

    /// Same URL with another host.
    ///
    /// `host` is written as it would appear in a URL: `example.org` or
    /// `[::1]`. Userinfo, port, path, query and fragment are kept.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::MissingHost`] at offset 0 if this URL is relative.
    /// - [`ErrorKind::IllegalByte`] at the offending offset of `host` for a
    ///   delimiter (`/`, `?`, `#`, `@`), or a `:` outside brackets.
    /// - Any error from reparsing the result, with offsets into it; an empty
    ///   `host` is rejected this way when the scheme requires one.
    pub fn with_host(&self, host: &[u8]) -> Result<Self> {
        if !self.is_absolute() {
            return Err(ParseError::new(ErrorKind::MissingHost, 0));
        }
        let bracketed = host.first() == Some(&b'[');
        if let Some(pos) = host
            .iter()
            .position(|&b| is_authority_end(b) || b == b'@' || (b == b':' && !bracketed))
        {
            return Err(ParseError::new(ErrorKind::IllegalByte, pos));
        }

        let base = self.as_parsed();
        let mut bytes = Vec::with_capacity(self.buffer.len() + host.len());
        bytes.extend_from_slice(&self.buffer[..self.authority_start()]);
        if let Some(userinfo) = base.userinfo() {
            bytes.extend_from_slice(userinfo);
            bytes.push(b'@');
        }
        bytes.extend_from_slice(host);
        bytes.extend_from_slice(&self.buffer[self.host_end()..]);
        Self::parse_with(bytes, ParseOptions::lenient())
    }

    /// Same URL with another scheme.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::MissingHost`] at offset 0 if this URL is relative.
    /// - [`ErrorKind::EmptyInput`] if `scheme` is empty.
    /// - [`ErrorKind::IllegalByte`] at the offending offset of `scheme` if it
    ///   does not start with a letter or holds a byte other than letters,
    ///   digits, `+`, `-` and `.`.
    pub fn with_scheme(&self, scheme: &[u8]) -> Result<Self> {
        if !self.is_absolute() {
            return Err(ParseError::new(ErrorKind::MissingHost, 0));
        }
        match scheme.first() {
            None => return Err(ParseError::new(ErrorKind::EmptyInput, 0)),
            Some(b) if !b.is_ascii_alphabetic() => {
                return Err(ParseError::new(ErrorKind::IllegalByte, 0));
            }
            Some(_) => {}
        }
        if let Some(pos) = scheme.iter().position(|&b| !is_scheme_byte(b)) {
            return Err(ParseError::new(ErrorKind::IllegalByte, pos));
        }

        let scheme_end = self.components.scheme.map_or(0, |span| span.end());
        let mut bytes = Vec::with_capacity(self.buffer.len() + scheme.len());
        bytes.extend_from_slice(scheme);
        bytes.extend_from_slice(&self.buffer[scheme_end..]);
        Self::parse_with(bytes, ParseOptions::lenient())
    }

    /// Offset just past `scheme://`
    fn authority_start(&self) -> usize {
        self.components.scheme.map_or(0, |span| span.end() + 3)
    }

    /// Offset just past the host, including a closing `]`
    fn host_end(&self) -> usize {
        self.components.host.map_or(0, |span| {
            span.end() + usize::from(self.components.host_is_ipv6)
        })
    }
}

fn trim_end_slashes(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != b'/').map_or(0, |pos| pos + 1);
    &bytes[..end]
}

fn trim_start_slashes(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != b'/').unwrap_or(bytes.len());
    &bytes[start..]
}

impl From<ParsedUrl<'_>> for OwnedUrl {
    fn from(url: ParsedUrl<'_>) -> Self {
        url.to_owned_url()
    }
}

impl core::str::FromStr for OwnedUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OwnedUrl {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<u8>> for OwnedUrl {
    type Error = ParseError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::parse(bytes)
    }
}

impl AsRef<[u8]> for OwnedUrl {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}

impl PartialEq for OwnedUrl {
    fn eq(&self, other: &Self) -> bool {
        self.as_parsed() == other.as_parsed()
    }
}

impl Eq for OwnedUrl {}

impl core::hash::Hash for OwnedUrl {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_parsed().hash(state);
    }
}

impl PartialEq<ParsedUrl<'_>> for OwnedUrl {
    fn eq(&self, other: &ParsedUrl<'_>) -> bool {
        self.as_parsed() == *other
    }
}

impl core::fmt::Debug for OwnedUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("OwnedUrl").field(&Lossy(&self.buffer)).finish()
    }
}

impl core::fmt::Display for OwnedUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&Lossy(&self.buffer), f)
    }
}
