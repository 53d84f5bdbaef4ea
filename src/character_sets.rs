/// Byte classes used by the parser state machine.
///
/// One lookup per byte; a byte may belong to several classes.
const SCHEME: u8 = 1 << 0;
const ILLEGAL: u8 = 1 << 1;
const AUTHORITY_END: u8 = 1 << 2;
const PATH_END: u8 = 1 << 3;

const BYTE_CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // Scheme chars: a-z, A-Z, 0-9, +, -, .
    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] |= SCHEME;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] |= SCHEME;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] |= SCHEME;
        i += 1;
    }
    table[b'+' as usize] |= SCHEME;
    table[b'-' as usize] |= SCHEME;
    table[b'.' as usize] |= SCHEME;

    // C0 controls and space
    let mut i = 0u8;
    while i <= b' ' {
        table[i as usize] |= ILLEGAL;
        i += 1;
    }

    // Delimiters that end the authority
    table[b'/' as usize] |= AUTHORITY_END;
    table[b'?' as usize] |= AUTHORITY_END;
    table[b'#' as usize] |= AUTHORITY_END;

    // Delimiters that end the path (query/fragment)
    table[b'?' as usize] |= PATH_END;
    table[b'#' as usize] |= PATH_END;

    table
};

/// Letter, digit, `+`, `-` or `.`
#[inline]
pub fn is_scheme_byte(b: u8) -> bool {
    BYTE_CLASS_TABLE[b as usize] & SCHEME != 0
}

/// C0 control (0x00-0x1F) or space
#[inline]
pub fn is_illegal_byte(b: u8) -> bool {
    BYTE_CLASS_TABLE[b as usize] & ILLEGAL != 0
}

/// `/`, `?` or `#`
#[inline]
pub fn is_authority_end(b: u8) -> bool {
    BYTE_CLASS_TABLE[b as usize] & AUTHORITY_END != 0
}

/// `?` or `#`
#[inline]
pub fn is_path_end(b: u8) -> bool {
    BYTE_CLASS_TABLE[b as usize] & PATH_END != 0
}
