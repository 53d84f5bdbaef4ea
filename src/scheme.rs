use crate::types::SchemeType;

/// Get the scheme type from raw scheme bytes (ASCII case-insensitive).
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme_type(scheme: &[u8]) -> SchemeType {
    // Perfect hash: filter by length first, then first byte, then full comparison
    match (scheme.len(), scheme.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'w')) if scheme.eq_ignore_ascii_case(b"ws") => SchemeType::Ws,
        (3, Some(b'w')) if scheme.eq_ignore_ascii_case(b"wss") => SchemeType::Wss,
        (4, Some(b'h')) if scheme.eq_ignore_ascii_case(b"http") => SchemeType::Http,
        (5, Some(b'h')) if scheme.eq_ignore_ascii_case(b"https") => SchemeType::Https,
        _ => SchemeType::Other,
    }
}
