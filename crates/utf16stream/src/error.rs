use thiserror::Error;

/// Error from the strict UTF-8-with-surrogates decoder.
///
/// Offsets index the input byte slice and point at the first byte of the
/// sequence that failed to decode.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte that cannot start any 1-4 byte sequence.
    #[error("invalid lead byte {byte:#04x} at offset {offset}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending byte.
        offset: usize,
    },
    /// The input ended inside a multi-byte sequence.
    #[error("truncated {expected}-byte sequence at offset {offset}")]
    TruncatedSequence {
        /// Length the lead byte promised.
        expected: usize,
        /// Byte offset of the lead byte.
        offset: usize,
    },
    /// A trailing byte outside `0x80..=0xBF`.
    #[error("invalid continuation byte {byte:#04x} at offset {offset}")]
    InvalidContinuation {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the sequence's lead byte.
        offset: usize,
    },
    /// A code point encoded in more bytes than its shortest form.
    #[error("overlong encoding of U+{value:04X} at offset {offset}")]
    OverlongSequence {
        /// The decoded value.
        value: u32,
        /// Byte offset of the sequence's lead byte.
        offset: usize,
    },
    /// A 4-byte sequence decoding outside the supplementary planes.
    #[error("code point {value:#x} out of range at offset {offset}")]
    OutOfRangeCodePoint {
        /// The decoded value.
        value: u32,
        /// Byte offset of the sequence's lead byte.
        offset: usize,
    },
}
