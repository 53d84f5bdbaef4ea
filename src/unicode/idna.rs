use crate::character_sets::{is_authority_end, is_illegal_byte};
use crate::compat::Cow;

/// Convert a registered name to its canonical ASCII form.
///
/// ASCII hosts are lowercased (borrowed when already lowercase). Non-ASCII
/// hosts go through IDNA `ToASCII` when they are valid UTF-8; hosts IDNA
/// rejects, or maps to something that is not a usable host, are only
/// ASCII-lowercased.
pub fn host_to_ascii(host: &[u8]) -> Cow<'_, [u8]> {
    // Fast path: pure ASCII, most common case
    if host.is_ascii() {
        if host.iter().any(u8::is_ascii_uppercase) {
            return Cow::Owned(host.to_ascii_lowercase());
        }
        return Cow::Borrowed(host);
    }

    // Slow path: Unicode - use full IDNA processing
    let ascii = core::str::from_utf8(host)
        .ok()
        .and_then(|domain| idna::domain_to_ascii(domain).ok())
        .filter(|ascii| is_usable_host(ascii.as_bytes()));
    match ascii {
        Some(ascii) => Cow::Owned(ascii.into_bytes()),
        None => Cow::Owned(host.to_ascii_lowercase()),
    }
}

/// Non-empty and free of bytes that would end or split the host when the
/// URL is parsed again. IDNA maps some characters to nothing (U+00AD) and
/// others to delimiters (U+FF1A to `:`).
fn is_usable_host(host: &[u8]) -> bool {
    !host.is_empty()
        && !host.iter().any(|&b| {
            is_illegal_byte(b) || is_authority_end(b) || matches!(b, b'@' | b':' | b'[' | b']')
        })
}
