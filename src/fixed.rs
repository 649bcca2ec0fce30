//! Fixed-length string fields.
//!
//! Legacy binary formats store text in fields of a declared width, padding the unused tail with
//! NUL bytes. [`encode`] produces such a field from a value and [`trim_nul`] recovers the value
//! from a field.

/// Strips trailing NUL padding from a fixed-length field.
///
/// The result ends at the last non-NUL byte. A field without trailing NUL is returned unchanged,
/// a field made entirely of NUL bytes yields an empty slice. NUL bytes before the last non-NUL
/// byte are kept.
///
/// # Examples
///
/// ```rust
/// use endianbuf::fixed::trim_nul;
///
/// assert_eq!(trim_nul(b"AB\0\0\0"), b"AB");
/// assert_eq!(trim_nul(b"ABCDE"), b"ABCDE");
/// assert_eq!(trim_nul(b"A\0B\0"), b"A\0B");
/// assert_eq!(trim_nul(b"\0\0\0"), b"");
/// ```
#[must_use]
pub fn trim_nul(field: &[u8]) -> &[u8] {
    match field.iter().rposition(|&byte| byte != 0) {
        Some(last) => &field[..=last],
        None => &[],
    }
}

/// Encodes `value` into a field of exactly `length` bytes.
///
/// Shorter values are zero-padded, longer ones truncated.
///
/// # Examples
///
/// ```rust
/// use endianbuf::fixed::encode;
///
/// assert_eq!(encode(b"AB", 4), b"AB\0\0");
/// assert_eq!(encode(b"ABCDEF", 3), b"ABC");
/// ```
#[must_use]
pub fn encode(value: &[u8], length: usize) -> Vec<u8> {
    let mut field = vec![0u8; length];
    let copied = value.len().min(length);
    field[..copied].copy_from_slice(&value[..copied]);
    field
}
