//! Lazy UTF-16 stream over a borrowed span of UTF-16 units or UTF-8 bytes.
//!
//! The stream is a forward-only, single-pass cursor. A UTF-16-backed source
//! is a zero-cost pass-through; a UTF-8-backed source is decoded on demand
//! into a bounded lookahead that is refilled as the cursor crosses it, so
//! the full input is never materialized as UTF-16. A supplementary-plane
//! code point always enters the lookahead as a complete surrogate pair, and
//! malformed UTF-8 decodes to U+FFFD.
//!
//! Callers must check [`has_char`](Utf16Stream::has_char) before calling
//! [`current`](Utf16Stream::current) or [`advance`](Utf16Stream::advance);
//! doing otherwise is a programming error, not a recoverable condition.
//! Moving the stream value transfers the cursor without disturbing the
//! remaining output.

use alloc::vec::Vec;

/// Code units to decode per refill of the UTF-8 lookahead. A pair pushed at
/// the boundary may exceed this by one unit.
const CHUNK_UNITS: usize = 1024;

/// The two backing-storage cases.
#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    Units(&'a [u16]),
    /// The undecoded tail of the byte input; consumed as the lookahead
    /// refills.
    Bytes(&'a [u8]),
}

/// A forward-only cursor producing UTF-16 code units from a caller-owned
/// span of either native UTF-16 units or UTF-8 bytes.
///
/// ```
/// use utf16stream::Utf16Stream;
///
/// // U+1F639 decodes to a surrogate pair, one unit at a time.
/// let mut stream = Utf16Stream::from_utf8(&[0xF0, 0x9F, 0x98, 0xB9]);
/// assert!(stream.has_char());
/// assert_eq!(stream.current(), 0xD83D);
/// stream.advance();
/// assert_eq!(stream.current(), 0xDE39);
/// stream.advance();
/// assert!(!stream.has_char());
/// ```
#[derive(Debug)]
pub struct Utf16Stream<'a> {
    source: Source<'a>,
    /// Decoded lookahead for the byte-backed case; unused for unit-backed
    /// sources.
    decoded: Vec<u16>,
    /// Index into the source slice (unit-backed) or `decoded` (byte-backed).
    pos: usize,
}

impl<'a> Utf16Stream<'a> {
    /// Opens a pass-through stream over native UTF-16 code units.
    #[must_use]
    pub fn from_utf16(units: &'a [u16]) -> Self {
        Utf16Stream {
            source: Source::Units(units),
            decoded: Vec::new(),
            pos: 0,
        }
    }

    /// Opens a stream that decodes UTF-8 bytes to UTF-16 incrementally.
    #[must_use]
    pub fn from_utf8(bytes: &'a [u8]) -> Self {
        let mut stream = Utf16Stream {
            source: Source::Bytes(bytes),
            decoded: Vec::with_capacity(CHUNK_UNITS + 1),
            pos: 0,
        };
        stream.refill();
        stream
    }

    /// Returns false exactly when no further code units remain.
    #[must_use]
    pub fn has_char(&self) -> bool {
        match self.source {
            Source::Units(units) => self.pos < units.len(),
            // Invariant: the lookahead is non-empty at the cursor unless
            // the byte source is exhausted.
            Source::Bytes(_) => self.pos < self.decoded.len(),
        }
    }

    /// Returns the code unit at the cursor without advancing.
    ///
    /// Only valid while [`has_char`](Self::has_char) is true; calling it at
    /// end of input is a contract violation and panics.
    #[must_use]
    pub fn current(&self) -> u16 {
        debug_assert!(self.has_char(), "current() past end of stream");
        match self.source {
            Source::Units(units) => units[self.pos],
            Source::Bytes(_) => self.decoded[self.pos],
        }
    }

    /// Moves the cursor to the next code unit, decoding further bytes from
    /// a UTF-8-backed source as needed.
    ///
    /// Only valid while [`has_char`](Self::has_char) is true.
    pub fn advance(&mut self) {
        debug_assert!(self.has_char(), "advance() past end of stream");
        self.pos += 1;
        if matches!(self.source, Source::Bytes(_)) && self.pos == self.decoded.len() {
            self.refill();
        }
    }

    /// Refills the lookahead from the undecoded byte tail. No-op for
    /// unit-backed sources.
    fn refill(&mut self) {
        let Source::Bytes(ref mut bytes) = self.source else {
            return;
        };
        self.decoded.clear();
        self.pos = 0;
        let mut tail = *bytes;
        while self.decoded.len() < CHUNK_UNITS && !tail.is_empty() {
            let (ch, len) = bstr::decode_utf8(tail);
            tail = &tail[len..];
            match ch {
                Some(c) => {
                    let mut pair = [0u16; 2];
                    self.decoded.extend_from_slice(c.encode_utf16(&mut pair));
                }
                // Maximal subpart of an ill-formed sequence.
                None => self.decoded.push(0xFFFD),
            }
        }
        *bytes = tail;
    }
}

impl Iterator for Utf16Stream<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if !self.has_char() {
            return None;
        }
        let unit = self.current();
        self.advance();
        Some(unit)
    }
}
