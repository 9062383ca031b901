//! UTF-16 to UTF-8 encoding under two unpaired-surrogate policies, and the
//! strict decoder for the lossless policy's output.
//!
//! Well-formed UTF-16 encodes identically under both policies. They differ
//! only on malformed input, which is never an error here (see the crate
//! docs): each policy resolves an unpaired surrogate half deterministically.
//!
//! - The *single-surrogates* policy encodes **every** code unit as the
//!   1-3 byte UTF-8 form of its own 16-bit value, so a surrogate half
//!   (paired or not) becomes a reserved `0xED`-led 3-byte sequence. The
//!   result is not standard UTF-8 but is unique per input and fully
//!   reversible via [`utf8_with_surrogates_to_utf16`].
//! - The *replacements* policy combines valid pairs into proper 4-byte
//!   sequences and maps unpaired halves to U+FFFD, yielding standard UTF-8
//!   at the cost of discarding the original half.

use alloc::vec::Vec;

use crate::{ascii::is_all_ascii, error::DecodeError};

const HIGH_SURROGATE: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATE: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// UTF-8 bytes of U+FFFD.
const REPLACEMENT: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// Appends the shortest UTF-8 form of `cp`. Accepts surrogate-range values,
/// which is exactly what the single-surrogates policy needs; callers on the
/// standard-UTF-8 path must not pass them.
fn push_code_point(out: &mut Vec<u8>, cp: u32) {
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.push(0xC0 | (cp >> 6) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else if cp < 0x1_0000 {
        out.push(0xE0 | (cp >> 12) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    } else {
        out.push(0xF0 | (cp >> 18) as u8);
        out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        out.push(0x80 | (cp & 0x3F) as u8);
    }
}

fn combine_pair(high: u16, low: u16) -> u32 {
    0x1_0000 + ((u32::from(high) & 0x3FF) << 10 | (u32::from(low) & 0x3FF))
}

/// Appends the lossless UTF-8 encoding of `input` to `out`.
///
/// Every code unit is encoded independently as the 1-3 byte UTF-8 form of
/// its own value; surrogate halves each become a 3-byte sequence whether or
/// not they form a pair. The whole input is always consumed, and distinct
/// inputs always produce distinct outputs.
///
/// ```
/// let mut out = Vec::new();
/// utf16stream::utf16_to_utf8_with_single_surrogates(&mut out, &[0xD83D, 0xDE39]);
/// assert_eq!(out, [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0xB9]);
/// ```
pub fn utf16_to_utf8_with_single_surrogates(out: &mut Vec<u8>, input: &[u16]) {
    if is_all_ascii(input) {
        out.extend(input.iter().map(|&unit| unit as u8));
        return;
    }
    out.reserve(input.len());
    for &unit in input {
        push_code_point(out, u32::from(unit));
    }
}

/// Appends the standard UTF-8 encoding of `input` to `out`, replacing
/// unpaired surrogate halves with U+FFFD.
///
/// `max_scalars`, when `Some`, limits the output to that many decoded scalar
/// values; a surrogate pair counts as one and is never split by the limit.
/// Returns whether the entire input was consumed (always true when
/// `max_scalars` is `None`).
///
/// ```
/// let mut out = Vec::new();
/// let fully = utf16stream::utf16_to_utf8_with_replacements(
///     &mut out,
///     &[0xD83D, 0xDE39, 0xD83D],
///     None,
/// );
/// assert!(fully);
/// // A valid pair, then a lone high surrogate.
/// assert_eq!(out, [0xF0, 0x9F, 0x98, 0xB9, 0xEF, 0xBF, 0xBD]);
/// ```
pub fn utf16_to_utf8_with_replacements(
    out: &mut Vec<u8>,
    input: &[u16],
    max_scalars: Option<usize>,
) -> bool {
    let limit = max_scalars.unwrap_or(usize::MAX);
    if is_all_ascii(input) {
        // One unit per scalar, one byte per unit.
        let n = input.len().min(limit);
        out.extend(input[..n].iter().map(|&unit| unit as u8));
        return n == input.len();
    }
    let mut written = 0;
    let mut i = 0;
    while i < input.len() {
        if written == limit {
            return false;
        }
        let unit = input[i];
        if HIGH_SURROGATE.contains(&unit) {
            if let Some(&low) = input.get(i + 1).filter(|&&low| LOW_SURROGATE.contains(&low)) {
                push_code_point(out, combine_pair(unit, low));
                i += 2;
            } else {
                out.extend_from_slice(&REPLACEMENT);
                i += 1;
            }
        } else if LOW_SURROGATE.contains(&unit) {
            out.extend_from_slice(&REPLACEMENT);
            i += 1;
        } else {
            push_code_point(out, u32::from(unit));
            i += 1;
        }
        written += 1;
    }
    true
}

/// Decodes bytes produced by [`utf16_to_utf8_with_single_surrogates`] back
/// into UTF-16 code units, appending to `out`.
///
/// A 1-3 byte sequence yields one code unit, with surrogate-range values
/// allowed through as-is; a 4-byte sequence yields the surrogate pair for
/// its supplementary-plane code point. Because standard UTF-8 is also
/// accepted, this doubles as a plain UTF-8 to UTF-16 decoder for trusted
/// input.
///
/// # Errors
///
/// Returns a [`DecodeError`] for a byte that cannot lead or continue a
/// sequence, a sequence cut off by end of input, an overlong form, or a
/// 4-byte sequence outside the supplementary planes. `out` retains the
/// units decoded before the failure.
pub fn utf8_with_surrogates_to_utf16(out: &mut Vec<u16>, bytes: &[u8]) -> Result<(), DecodeError> {
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        let len = match lead {
            0x00..=0x7F => {
                out.push(u16::from(lead));
                i += 1;
                continue;
            }
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(DecodeError::InvalidLeadByte { byte: lead, offset: i }),
        };
        if i + len > bytes.len() {
            return Err(DecodeError::TruncatedSequence { expected: len, offset: i });
        }
        // The low (7 - len) bits of the lead byte are payload.
        let mut cp = u32::from(lead & (0x7F >> len));
        for &byte in &bytes[i + 1..i + len] {
            if byte & 0xC0 != 0x80 {
                return Err(DecodeError::InvalidContinuation { byte, offset: i });
            }
            cp = cp << 6 | u32::from(byte & 0x3F);
        }
        match len {
            2 if cp < 0x80 => {
                return Err(DecodeError::OverlongSequence { value: cp, offset: i });
            }
            3 if cp < 0x800 => {
                return Err(DecodeError::OverlongSequence { value: cp, offset: i });
            }
            4 if !(0x1_0000..=0x10_FFFF).contains(&cp) => {
                return Err(DecodeError::OutOfRangeCodePoint { value: cp, offset: i });
            }
            _ => {}
        }
        if cp < 0x1_0000 {
            out.push(cp as u16);
        } else {
            let v = cp - 0x1_0000;
            out.push(0xD800 | (v >> 10) as u16);
            out.push(0xDC00 | (v & 0x3FF) as u16);
        }
        i += len;
    }
    Ok(())
}
