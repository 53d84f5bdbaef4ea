use crate::compat::{ToString, Vec};
use crate::owned_url::OwnedUrl;
use crate::span::Span;
use crate::types::SchemeType;
use crate::unicode::percent_encode::percent_encode_into;
use crate::url_components::UrlComponents;
use percent_encoding::AsciiSet;

/// Writes URL components into a single buffer, recording their spans as it
/// goes. Components must be written in source order.
pub struct UrlBuilder {
    buffer: Vec<u8>,
    components: UrlComponents,
}

impl UrlBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            components: UrlComponents::new(),
        }
    }

    /// Append bytes, percent-encoding them with `encode_set` when given
    fn push_component(&mut self, bytes: &[u8], encode_set: Option<&'static AsciiSet>) -> Span {
        let start = self.buffer.len();
        match encode_set {
            Some(set) => percent_encode_into(&mut self.buffer, bytes, set),
            None => self.buffer.extend_from_slice(bytes),
        }
        Span::range(start, self.buffer.len())
    }

    /// `scheme:`
    pub fn scheme(&mut self, scheme: &[u8], scheme_type: SchemeType) -> &mut Self {
        self.components.scheme = Some(self.push_component(scheme, None));
        self.components.scheme_type = scheme_type;
        self.buffer.push(b':');
        self
    }

    /// `//` that opens the authority
    pub fn authority(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(b"//");
        self
    }

    /// `userinfo@`
    pub fn userinfo(
        &mut self,
        userinfo: &[u8],
        encode_set: Option<&'static AsciiSet>,
    ) -> &mut Self {
        self.components.userinfo = Some(self.push_component(userinfo, encode_set));
        self.buffer.push(b'@');
        self
    }

    /// Host, bracketed when it is an IPv6 literal
    pub fn host(&mut self, host: &[u8], is_ipv6: bool) -> &mut Self {
        if is_ipv6 {
            self.buffer.push(b'[');
        }
        self.components.host = Some(self.push_component(host, None));
        self.components.host_is_ipv6 = is_ipv6;
        if is_ipv6 {
            self.buffer.push(b']');
        }
        self
    }

    /// `:port`
    pub fn port(&mut self, port: u16) -> &mut Self {
        self.buffer.push(b':');
        let digits = port.to_string();
        self.components.port = Some(self.push_component(digits.as_bytes(), None));
        self.components.port_number = Some(port);
        self
    }

    pub fn path(&mut self, path: &[u8], encode_set: Option<&'static AsciiSet>) -> &mut Self {
        self.components.path = self.push_component(path, encode_set);
        self
    }

    /// `?query`
    pub fn query(&mut self, query: &[u8], encode_set: Option<&'static AsciiSet>) -> &mut Self {
        self.buffer.push(b'?');
        self.components.query = Some(self.push_component(query, encode_set));
        self
    }

    /// `#fragment`
    pub fn fragment(
        &mut self,
        fragment: &[u8],
        encode_set: Option<&'static AsciiSet>,
    ) -> &mut Self {
        self.buffer.push(b'#');
        self.components.fragment = Some(self.push_component(fragment, encode_set));
        self
    }

    pub fn finish(self) -> OwnedUrl {
        OwnedUrl::from_parts(self.buffer, self.components)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}
