use crate::compat::Vec;
use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

// Encode sets used when normalizing a parsed URL.
// Non-ASCII bytes are always encoded; `%` is never encoded so existing
// escapes survive.

/// C0 control percent-encode set, plus space
pub const USERINFO_SET: &AsciiSet = &CONTROLS.add(b' ');

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Path percent-encode set
/// Fragment + {, }
pub const PATH_SET: &AsciiSet = &FRAGMENT_SET.add(b'{').add(b'}');

/// Query percent-encode set
/// C0 control + space, ", <, >, '
pub const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\'');

/// Write percent-encoded bytes directly to buffer
pub fn percent_encode_into(buffer: &mut Vec<u8>, input: &[u8], encode_set: &'static AsciiSet) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for chunk in percent_encode(input, encode_set) {
        buffer.extend_from_slice(chunk.as_bytes());
    }
}
