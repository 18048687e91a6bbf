//! Byte-string literal encoding for generated source.

use std::fmt::Write;

/// Encode `data` as a Rust byte-string literal, quotes included.
///
/// Printable ASCII and tab are emitted as-is, `"` and `\` are
/// backslash-escaped, newline becomes `\n`, and every other byte becomes
/// `\xNN`.
///
/// ```
/// use embed_vfs::literal::encode;
///
/// assert_eq!(encode(b"hi\n\x00\""), r#"b"hi\n\x00\"""#);
/// ```
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() + 3);
    out.push_str("b\"");
    for &byte in data {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\t' | 0x20..=0x7e => out.push(byte as char),
            _ => {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\x{:02x}", byte);
            }
        }
    }
    out.push('"');
    out
}
