/// Iterator over the raw `key=value` pairs of a query string.
///
/// Pairs are separated by `&` and split at the first `=`. Empty pairs are
/// skipped and a pair without `=` has an empty value. Nothing is decoded.
///
/// # Examples
///
/// ```
/// let url = urlspan::parse("/search?q=rust&page=2&flag").unwrap();
/// let pairs: Vec<_> = url.query_pairs().collect();
/// assert_eq!(pairs, [
///     (&b"q"[..], &b"rust"[..]),
///     (&b"page"[..], &b"2"[..]),
///     (&b"flag"[..], &b""[..]),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct QueryPairs<'a> {
    remaining: &'a [u8],
}

impl<'a> QueryPairs<'a> {
    pub(crate) fn new(query: &'a [u8]) -> Self {
        Self { remaining: query }
    }
}

impl<'a> Iterator for QueryPairs<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.remaining.is_empty() {
            let (pair, rest) = match memchr::memchr(b'&', self.remaining) {
                Some(pos) => (&self.remaining[..pos], &self.remaining[pos + 1..]),
                None => (self.remaining, &[][..]),
            };
            self.remaining = rest;

            if pair.is_empty() {
                continue;
            }
            return Some(match memchr::memchr(b'=', pair) {
                Some(pos) => (&pair[..pos], &pair[pos + 1..]),
                None => (pair, &[][..]),
            });
        }
        None
    }
}

impl core::iter::FusedIterator for QueryPairs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    fn pairs(query: &[u8]) -> Vec<(&[u8], &[u8])> {
        QueryPairs::new(query).collect()
    }

    #[test]
    fn test_parse_empty() {
        assert!(pairs(b"").is_empty());
        assert!(pairs(b"&&").is_empty());
    }

    #[test]
    fn test_parse_multiple() {
        let result = pairs(b"a=1&b&&c=3");
        assert_eq!(
            result,
            [(&b"a"[..], &b"1"[..]), (&b"b"[..], &b""[..]), (&b"c"[..], &b"3"[..])]
        );
    }

    #[test]
    fn test_equals_in_value() {
        assert_eq!(pairs(b"key=a=b"), [(&b"key"[..], &b"a=b"[..])]);
    }

    #[test]
    fn test_no_decoding() {
        assert_eq!(pairs(b"q=a%20b+c"), [(&b"q"[..], &b"a%20b+c"[..])]);
    }
}
