//! Byte classification predicates.
//!
//! Total, side-effect-free functions over single bytes. Everything the
//! scanner treats specially is ASCII; bytes of multi-byte UTF-8 characters
//! never satisfy any of these predicates, so they fall through to the
//! identifier rule.

/// ASCII letters only.
#[inline]
pub const fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// ASCII letters or digits.
#[inline]
pub const fn is_alnum(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Space, tab, CR or LF.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
pub const fn is_punctuation(b: u8) -> bool {
    matches!(b, b'.' | b',' | b'(' | b')' | b'{' | b'}' | b'\\' | b'"')
}

/// Bytes allowed in a metadata reference after the leading `!`.
#[inline]
pub const fn is_metadata_char(b: u8) -> bool {
    is_alnum(b) || matches!(b, b'-' | b'$' | b'.' | b'_' | b'\\')
}

/// Bytes allowed in `@`/`%` variable names and bare identifiers.
#[inline]
pub const fn is_label_char(b: u8) -> bool {
    is_alnum(b) || matches!(b, b'-' | b'$' | b'.' | b'_')
}

#[inline]
pub const fn is_numeric_lead(b: u8) -> bool {
    b.is_ascii_digit() || b == b'-' || b == b'+'
}

/// Numeric lead plus `.`, `E` and `e`: integers, decimals, exponents.
#[inline]
pub const fn is_numeric(b: u8) -> bool {
    is_numeric_lead(b) || matches!(b, b'.' | b'E' | b'e')
}

/// Returns the number of bytes in the UTF-8 character starting with `lead`.
///
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
pub const fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
