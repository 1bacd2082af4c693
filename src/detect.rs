//! Input validation for XML record exports.
//!
//! The extension gate runs before any file access: a path that does not end
//! in `.xml` is rejected without invoking the parser.

use crate::error::{Error, Result};
use std::path::Path;

/// UTF-8 BOM: EF BB BF
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Verify that a path carries the `.xml` extension (ASCII case-insensitive).
///
/// # Example
///
/// ```
/// use fieldtab::detect::check_extension;
///
/// assert!(check_extension("export.xml").is_ok());
/// assert!(check_extension("export.XML").is_ok());
/// assert!(check_extension("export.txt").is_err());
/// assert!(check_extension("export").is_err());
/// ```
pub fn check_extension(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("xml") => Ok(()),
        Some(ext) => Err(Error::UnsupportedExtension(format!(".{}", ext))),
        None => Err(Error::UnsupportedExtension("(no extension)".to_string())),
    }
}

/// Decode raw XML bytes to a String, honoring a BOM when present.
///
/// Record exports saved by Windows tooling are frequently UTF-16; this
/// handles UTF-8 and UTF-16 LE/BE BOMs, falls back to a null-byte heuristic
/// for BOM-less UTF-16, and finally to lossy UTF-8.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if bytes.len() >= 3 && bytes[..3] == UTF8_BOM {
        return String::from_utf8(bytes[3..].to_vec())
            .map_err(|e| Error::Encoding(e.to_string()));
    }

    if bytes.len() >= 2 && bytes[0] == 0xFF && bytes[1] == 0xFE {
        // UTF-16 LE BOM: FF FE
        return decode_utf16_le(&bytes[2..]);
    }

    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        // UTF-16 BE BOM: FE FF
        return decode_utf16_be(&bytes[2..]);
    }

    // No BOM. BOM-less UTF-16 must be detected before trying UTF-8: the
    // NUL-interleaved bytes of UTF-16 ASCII are themselves valid UTF-8
    // (NUL is a legal code point), so a UTF-8-first decode would succeed
    // and return garbage. UTF-16 LE has null bytes in odd positions for
    // ASCII; BE in even positions. Null bytes never occur in XML text.
    if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
        return decode_utf16_le(bytes);
    }
    if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
        return decode_utf16_be(bytes);
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Decode UTF-16 Little Endian bytes to String.
fn decode_utf16_le(bytes: &[u8]) -> Result<String> {
    // Ensure even number of bytes
    let len = bytes.len() & !1;

    let u16_iter = (0..len)
        .step_by(2)
        .map(|i| u16::from_le_bytes([bytes[i], bytes[i + 1]]));

    char::decode_utf16(u16_iter)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Encoding(e.to_string()))
}

/// Decode UTF-16 Big Endian bytes to String.
fn decode_utf16_be(bytes: &[u8]) -> Result<String> {
    // Ensure even number of bytes
    let len = bytes.len() & !1;

    let u16_iter = (0..len)
        .step_by(2)
        .map(|i| u16::from_be_bytes([bytes[i], bytes[i + 1]]));

    char::decode_utf16(u16_iter)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Encoding(e.to_string()))
}

/// Cheap sniff: after leading whitespace the content must open a tag.
pub fn looks_like_xml(content: &str) -> bool {
    content.trim_start().starts_with('<')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_extension_accepts_xml() {
        assert!(check_extension("record.xml").is_ok());
        assert!(check_extension("record.XML").is_ok());
        assert!(check_extension("/some/dir/record.Xml").is_ok());
    }

    #[test]
    fn test_check_extension_rejects_other() {
        let result = check_extension("record.txt");
        assert!(matches!(result, Err(Error::UnsupportedExtension(_))));

        let result = check_extension("record");
        assert!(matches!(result, Err(Error::UnsupportedExtension(_))));
    }

    #[test]
    fn test_check_extension_message_names_extension() {
        let err = check_extension("record.csv").unwrap_err();
        assert!(err.to_string().contains(".csv"));
    }

    #[test]
    fn test_decode_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"<row/>");
        assert_eq!(decode_xml_bytes(&bytes).unwrap(), "<row/>");
    }

    #[test]
    fn test_decode_utf16_le_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for b in "<row/>".encode_utf16() {
            bytes.extend_from_slice(&b.to_le_bytes());
        }
        assert_eq!(decode_xml_bytes(&bytes).unwrap(), "<row/>");
    }

    #[test]
    fn test_decode_utf16_be_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for b in "<row/>".encode_utf16() {
            bytes.extend_from_slice(&b.to_be_bytes());
        }
        assert_eq!(decode_xml_bytes(&bytes).unwrap(), "<row/>");
    }

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_xml_bytes(b"<row/>").unwrap(), "<row/>");
    }

    #[test]
    fn test_decode_bomless_utf16_le() {
        let mut bytes = Vec::new();
        for b in "<row/>".encode_utf16() {
            bytes.extend_from_slice(&b.to_le_bytes());
        }
        // UTF-16 ASCII is also valid UTF-8; the null-byte heuristic must win
        let decoded = decode_xml_bytes(&bytes).unwrap();
        assert_eq!(decoded, "<row/>");
        assert!(!decoded.contains('\0'));
    }

    #[test]
    fn test_decode_bomless_utf16_be() {
        let mut bytes = Vec::new();
        for b in "<row/>".encode_utf16() {
            bytes.extend_from_slice(&b.to_be_bytes());
        }
        let decoded = decode_xml_bytes(&bytes).unwrap();
        assert_eq!(decoded, "<row/>");
        assert!(!decoded.contains('\0'));
    }

    #[test]
    fn test_looks_like_xml() {
        assert!(looks_like_xml("<row/>"));
        assert!(looks_like_xml("  \n\t<?xml version=\"1.0\"?>"));
        assert!(!looks_like_xml("name,value"));
        assert!(!looks_like_xml(""));
    }
}
