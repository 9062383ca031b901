#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf16stream::{
    Utf16Stream, utf8_with_surrogates_to_utf16, utf16_to_utf8_with_replacements,
    utf16_to_utf8_with_single_surrogates,
};

#[derive(Debug, Arbitrary)]
struct Input {
    units: Vec<u16>,
    max_scalars: Option<u16>,
}

fuzz_target!(|input: Input| {
    let Input { units, max_scalars } = input;

    // The lossless policy must round-trip any code-unit sequence exactly.
    let mut lossless = Vec::new();
    utf16_to_utf8_with_single_surrogates(&mut lossless, &units);
    let mut back = Vec::new();
    utf8_with_surrogates_to_utf16(&mut back, &lossless)
        .expect("lossless output must decode");
    assert_eq!(back, units);

    // The replacements policy must always emit valid UTF-8, and a bounded
    // run must be a prefix of the unbounded one.
    let mut full = Vec::new();
    assert!(utf16_to_utf8_with_replacements(&mut full, &units, None));
    let text = std::str::from_utf8(&full).expect("replacements output must be valid UTF-8");

    let mut bounded = Vec::new();
    let fully =
        utf16_to_utf8_with_replacements(&mut bounded, &units, max_scalars.map(usize::from));
    assert!(full.starts_with(&bounded));
    if fully {
        assert_eq!(bounded, full);
    }

    // Streaming the replacements output reproduces its UTF-16 form.
    let streamed: Vec<u16> = Utf16Stream::from_utf8(&full).collect();
    let expected: Vec<u16> = text.encode_utf16().collect();
    assert_eq!(streamed, expected);
});
