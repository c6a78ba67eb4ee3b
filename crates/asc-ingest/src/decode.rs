//! Windows-1252 text decoding.
//!
//! The source files come from legacy accounting systems that write one byte
//! per character. A strict UTF-8 decoder rejects bytes like 0xC1 ("Á"), so
//! the fixed Windows-1252 code page is used instead. Every byte value maps to
//! a character, which makes the decode step total.

use encoding_rs::WINDOWS_1252;

/// Decodes raw file bytes as Windows-1252 text.
///
/// BOM sniffing is disabled: the code page is fixed, never negotiated from
/// the content.
pub fn decode_windows_1252(bytes: &[u8]) -> String {
    let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}
