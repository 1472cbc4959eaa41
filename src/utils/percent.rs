use encoding_rs::GB18030;
use log::debug;

use crate::charset::CharEncoding;
use crate::error::CodecError;

/// Percent-encodes every byte of `input` under `encoding`.
///
/// Each byte becomes `%` plus its lowercase hex value with no zero padding,
/// so `0x0A` is written as `%a`. Nothing is left unescaped.
pub fn percent_encode(input: &str, encoding: CharEncoding) -> String {
    let bytes = encoding.encode(input);
    let mut encoded = String::with_capacity(bytes.len() * 3);
    for b in bytes {
        encoded.push_str(&format!("%{:x}", b));
    }
    encoded
}

/// Decodes pairs of adjacent percent triplets as one double-byte GB18030
/// character.
///
/// A `%` whose triplet is immediately followed by another `%` starts a pair:
/// `%XY%ZW` is read as the two bytes `[XY, ZW]` and decoded as GB18030.
/// Everything else, including a lone trailing `%XY`, is copied through
/// unchanged.
pub fn percent_decode(input: &str) -> Result<String, CodecError> {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '%' && chars.get(i + 3) == Some(&'%') {
            let b1 = hex_byte(&chars, i + 1)?;
            let b2 = hex_byte(&chars, i + 4)?;
            result.push_str(&decode_pair(b1, b2));
            // both triplets consumed
            i += 6;
        } else {
            if chars[i] == '%' {
                debug!("unpaired '%' at position {} copied literally", i);
            }
            result.push(chars[i]);
            i += 1;
        }
    }

    Ok(result)
}

/// Conventional byte-at-a-time decoding that accepts the unpadded triplets
/// produced by [`percent_encode`]: one or two hex digits follow each `%`.
/// A `%` without any hex digit after it is kept as a literal byte.
pub fn percent_decode_bytes(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut result = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let digits = bytes[i + 1..]
                .iter()
                .take(2)
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            if digits > 0 {
                let hex = &input[i + 1..i + 1 + digits];
                // at most two hex digits always fit in a byte
                if let Ok(byte) = u8::from_str_radix(hex, 16) {
                    result.push(byte);
                    i += 1 + digits;
                    continue;
                }
            }
        }
        result.push(bytes[i]);
        i += 1;
    }

    result
}

/// [`percent_decode_bytes`] followed by decoding the bytes under `encoding`.
pub fn percent_decode_with(input: &str, encoding: CharEncoding) -> String {
    encoding.decode(&percent_decode_bytes(input))
}

fn hex_byte(chars: &[char], at: usize) -> Result<u8, CodecError> {
    let hi = chars.get(at).and_then(|c| c.to_digit(16));
    let lo = chars.get(at + 1).and_then(|c| c.to_digit(16));
    match (hi, lo) {
        (Some(hi), Some(lo)) => Ok((hi * 16 + lo) as u8),
        _ => {
            let found: String = chars.iter().skip(at.saturating_sub(1)).take(3).collect();
            Err(CodecError::Decode(format!(
                "malformed percent triplet {:?} at position {}",
                found,
                at.saturating_sub(1)
            )))
        }
    }
}

// Every char GB18030 yields for the pair is kept, so two single-byte
// characters (e.g. `%41%42`) both survive. A lead byte left dangling at the
// end of the pair is dropped instead of becoming U+FFFD.
fn decode_pair(b1: u8, b2: u8) -> String {
    let bytes = [b1, b2];
    let (text, had_errors) = GB18030.decode_without_bom_handling(&bytes);
    if !had_errors {
        return text.into_owned();
    }

    debug!("bytes {:02x} {:02x} are not a complete GB18030 character", b1, b2);
    text.strip_suffix('\u{FFFD}').unwrap_or(&*text).to_string()
}
