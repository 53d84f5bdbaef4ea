use crate::types::HostKind;

/// Check if a host is a dotted-decimal IPv4 literal: exactly four
/// non-empty decimal octets, each at most 255.
pub fn is_ipv4(host: &[u8]) -> bool {
    let mut octets = 0;
    for part in host.split(|&b| b == b'.') {
        octets += 1;
        if octets > 4 || part.is_empty() || part.len() > 3 {
            return false;
        }
        let mut value = 0u16;
        for &b in part {
            if !b.is_ascii_digit() {
                return false;
            }
            value = value * 10 + u16::from(b - b'0');
        }
        if value > 255 {
            return false;
        }
    }
    octets == 4
}

/// Classify a host span; `is_ipv6` is the bracket flag from the parser
pub fn classify_host(host: &[u8], is_ipv6: bool) -> HostKind {
    if is_ipv6 {
        HostKind::Ipv6
    } else if is_ipv4(host) {
        HostKind::Ipv4
    } else {
        HostKind::RegName
    }
}

/// Append one decimal digit to a port value.
/// Returns `None` once the value no longer fits in 16 bits.
#[inline]
pub fn push_port_digit(port: u32, digit: u8) -> Option<u32> {
    let value = port * 10 + u32::from(digit - b'0');
    (value <= u32::from(u16::MAX)).then_some(value)
}
