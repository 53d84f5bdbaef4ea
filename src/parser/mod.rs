mod parse_url;
mod state;

pub use parse_url::parse_components;
use state::State;

use crate::error::Result;
use crate::options::ParseOptions;
use crate::parsed_url::ParsedUrl;

/// Parse a URL or request target in strict mode.
///
/// # Errors
///
/// Returns a [`ParseError`](crate::ParseError) with the offset of the first
/// offending byte.
///
/// # Examples
///
/// ```
/// use urlspan::Scheme;
///
/// let url = urlspan::parse("https://[::1]:8080/x").unwrap();
/// assert_eq!(url.scheme(), Some(Scheme::Https));
/// assert_eq!(url.host(), Some(&b"::1"[..]));
/// assert!(url.host_is_ipv6());
/// assert_eq!(url.port(), Some(8080));
/// assert_eq!(url.path(), b"/x");
/// ```
pub fn parse<I: AsRef<[u8]> + ?Sized>(input: &I) -> Result<ParsedUrl<'_>> {
    parse_with(input, ParseOptions::strict())
}

/// Parse a URL or request target with explicit options.
///
/// # Errors
///
/// Returns a [`ParseError`](crate::ParseError) with the offset of the first
/// offending byte.
pub fn parse_with<I: AsRef<[u8]> + ?Sized>(
    input: &I,
    options: ParseOptions,
) -> Result<ParsedUrl<'_>> {
    let input = input.as_ref();
    let components = parse_components(input, options)?;
    Ok(ParsedUrl::from_parts(input, components))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::Scheme;

    #[test]
    fn test_parse_basic() {
        let result = parse("http://example.com");
        match result {
            Ok(url) => {
                assert_eq!(url.scheme(), Some(Scheme::Http));
                assert_eq!(url.host(), Some(&b"example.com"[..]));
                assert_eq!(url.path(), b"/");
            }
            Err(e) => {
                panic!("Failed to parse: {e:?}");
            }
        }
    }

    #[test]
    fn test_parse_with_path() {
        let url = parse("http://example.com/path/to/resource").unwrap();
        assert_eq!(url.host(), Some(&b"example.com"[..]));
        assert_eq!(url.path(), b"/path/to/resource");
    }

    #[test]
    fn test_parse_with_query() {
        let url = parse("http://example.com/path?query=value&foo=bar").unwrap();
        assert_eq!(url.path(), b"/path");
        assert_eq!(url.query(), Some(&b"query=value&foo=bar"[..]));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_parse_with_hash() {
        let url = parse("http://example.com/path#fragment").unwrap();
        assert_eq!(url.path(), b"/path");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), Some(&b"fragment"[..]));
    }

    #[test]
    fn test_parse_with_port() {
        let url = parse("http://localhost:8080/api/v1/users").unwrap();
        assert_eq!(url.host(), Some(&b"localhost"[..]));
        assert_eq!(url.port(), Some(8080));
        assert_eq!(url.path(), b"/api/v1/users");
    }

    #[test]
    fn test_parse_bytes_and_strings() {
        let from_bytes = parse(b"/a?b").unwrap();
        let from_str = parse("/a?b").unwrap();
        assert_eq!(from_bytes, from_str);
    }

    #[test]
    fn test_parse_with_lenient() {
        assert_eq!(
            parse("/a b").unwrap_err().kind(),
            ErrorKind::IllegalByte
        );
        let url = parse_with("/a b", ParseOptions::lenient()).unwrap();
        assert_eq!(url.path(), b"/a b");
    }
}
