//! Surrogate-aware transcoding between UTF-16 code units and UTF-8 bytes,
//! plus a lazy streaming decoder for walking either storage form one UTF-16
//! unit at a time.
//!
//! The crate offers two encoder policies for malformed (unpaired-surrogate)
//! UTF-16 input:
//!
//! - [`utf16_to_utf8_with_single_surrogates`] preserves every code unit
//!   losslessly, giving each surrogate half its own reserved 3-byte
//!   sequence (CESU-8-style), and
//! - [`utf16_to_utf8_with_replacements`] produces standard UTF-8, mapping
//!   unpaired halves to U+FFFD, with an optional truncation limit counted
//!   in decoded scalar values.
//!
//! [`Utf16Stream`] is the read side: a forward-only cursor over a borrowed
//! span of either native UTF-16 units or UTF-8 bytes, decoding the latter
//! incrementally so arbitrarily large inputs never need to be materialized
//! as UTF-16 up front.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod ascii;
mod convert;
mod error;
mod stream;


pub use ascii::{AsciiUnit, is_all_ascii};
pub use convert::{
    utf8_with_surrogates_to_utf16, utf16_to_utf8_with_replacements,
    utf16_to_utf8_with_single_surrogates,
};
pub use error::DecodeError;
pub use stream::Utf16Stream;
