//! Payload normalisation.
//!
//! The message service returns the stored value JSON-encoded, so a plain
//! string arrives as `"Hello"`.  We peel off exactly one pair of
//! surrounding quotes; escapes and nested values are left untouched.

use heapless::String;

const QUOTE: u8 = b'"';

/// Strip one leading and one trailing `"` if both are present.
///
/// Payloads shorter than two bytes or not quote-delimited pass through
/// unchanged.
pub fn normalize(raw: &[u8]) -> &[u8] {
    match raw {
        [QUOTE, inner @ .., QUOTE] => inner,
        _ => raw,
    }
}

/// Normalise `raw` and copy it into `out`, replacing its contents.
///
/// The copy is cut to the capacity of `out`, independent of the buffer the
/// payload came from.  The text ends at the first NUL byte.  Cuts never
/// split a UTF-8 sequence; bytes that are not valid UTF-8 end the text at
/// the last valid character.
///
/// Returns `true` if anything was left out.
pub fn normalize_into<const M: usize>(raw: &[u8], out: &mut String<M>) -> bool {
    out.clear();

    let body = normalize(raw);
    let terminated = match body.iter().position(|&b| b == 0) {
        Some(nul) => &body[..nul],
        None => body,
    };
    let text = terminated
        .utf8_chunks()
        .next()
        .map_or("", |chunk| chunk.valid());

    let mut truncated = text.len() < body.len();
    for c in text.chars() {
        if out.push(c).is_err() {
            truncated = true;
            break;
        }
    }
    truncated
}
