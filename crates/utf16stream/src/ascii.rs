//! ASCII range scanning over byte and UTF-16 code-unit slices.
//!
//! [`is_all_ascii`] is the fast-path predicate the encoders use to skip the
//! general transcoding loop: a slice that is entirely ASCII can be copied to
//! the output byte-for-byte. The check runs a machine word at a time where
//! alignment allows, but its result is defined purely per element, so any
//! sub-slice of an all-ASCII slice is itself all-ASCII regardless of where
//! the word-aligned middle happens to fall.

/// Splat a 16-bit lane mask across every lane of a `usize`.
const fn splat_u16(lane: u16) -> usize {
    let mut word = 0usize;
    let mut i = 0;
    while i < size_of::<usize>() / 2 {
        word = (word << 16) | lane as usize;
        i += 1;
    }
    word
}

/// Set in any byte that is outside the ASCII range.
const BYTE_MASK: usize = usize::from_ne_bytes([0x80; size_of::<usize>()]);

/// Set in any 16-bit lane whose value is >= 0x80.
const WIDE_MASK: usize = splat_u16(0xFF80);

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// Element types [`is_all_ascii`] can scan: `u8` and `u16`.
///
/// Sealed; the two implementations cover the byte-oriented and
/// wide-character shapes text arrives in.
pub trait AsciiUnit: sealed::Sealed + Copy {
    /// Returns true iff every element of `units` is below 0x80.
    fn all_ascii(units: &[Self]) -> bool;
}

impl AsciiUnit for u8 {
    fn all_ascii(units: &[Self]) -> bool {
        // SAFETY: transmuting adjacent u8s to usize words is valid for any
        // bit pattern, and `align_to` preserves element order across the
        // head/middle/tail split.
        let (head, words, tail) = unsafe { units.align_to::<usize>() };
        head.iter().all(u8::is_ascii)
            && words.iter().all(|&w| w & BYTE_MASK == 0)
            && tail.iter().all(u8::is_ascii)
    }
}

impl AsciiUnit for u16 {
    fn all_ascii(units: &[Self]) -> bool {
        // SAFETY: as above; every bit pattern is a valid usize.
        let (head, words, tail) = unsafe { units.align_to::<usize>() };
        head.iter().all(|&u| u < 0x80)
            && words.iter().all(|&w| w & WIDE_MASK == 0)
            && tail.iter().all(|&u| u < 0x80)
    }
}

/// Returns true iff every element of `units` is in the ASCII range
/// (numeric value strictly below 0x80). An empty slice is all-ASCII.
///
/// ```
/// use utf16stream::is_all_ascii;
///
/// assert!(is_all_ascii(b"plain text"));
/// assert!(!is_all_ascii("héllo".as_bytes()));
/// assert!(is_all_ascii(&[0x48u16, 0x69]));
/// ```
#[must_use]
pub fn is_all_ascii<T: AsciiUnit>(units: &[T]) -> bool {
    T::all_ascii(units)
}
