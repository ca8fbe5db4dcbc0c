//! UTF-16 text decoding and encoding
//!
//! Input files are read as UTF-16: a byte-order mark picks the endianness and
//! is dropped, otherwise little-endian is assumed. Output is always written as
//! little-endian with a BOM.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

/// Byte-order mark for UTF-16 little-endian
pub const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Decode UTF-16 bytes into a string, returning None on malformed input
pub fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((enc, bom_len)) if enc == UTF_16LE || enc == UTF_16BE => (enc, &bytes[bom_len..]),
        _ => (UTF_16LE, bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
}

/// Encode a string as UTF-16 little-endian, prefixed with a BOM
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(UTF16LE_BOM.len() + text.len() * 2);
    out.extend_from_slice(&UTF16LE_BOM);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}
