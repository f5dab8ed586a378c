//! Shift_JIS to UTF-8 conversion.
//!
//! # Responsibilities
//! - Decode the raw upstream body (JIS X 0208 double-byte pairs, half-width
//!   katakana single bytes, ASCII passthrough) into a `String`
//! - Never fail: unmappable sequences become U+FFFD
//!
//! # Design Decisions
//! - Uses the WHATWG decoder from `encoding_rs`, the same implementation
//!   browsers (and reqwest) use, so output matches what a `TextDecoder`
//!   on the consuming side would have produced
//! - Decoding is deterministic: same bytes, same text

use encoding_rs::SHIFT_JIS;

/// A page decoded from the origin's legacy encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    /// The page text, now valid UTF-8.
    pub html: String,

    /// Character count of `html` (Unicode scalar values, not bytes).
    pub length: usize,
}

/// Decode Shift_JIS bytes, replacing unmappable sequences with U+FFFD.
pub fn decode_shift_jis(bytes: &[u8]) -> DecodedPage {
    let (text, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        tracing::warn!(
            input_bytes = bytes.len(),
            "shift_jis body contained unmappable sequences, replaced with U+FFFD"
        );
    }

    let html = text.into_owned();
    let length = html.chars().count();
    DecodedPage { html, length }
}
