//! End-to-end byte vectors for the two encoder policies and the stream,
//! exercised through the public API only.

use rstest::rstest;
use utf16stream::{
    Utf16Stream, utf8_with_surrogates_to_utf16, utf16_to_utf8_with_replacements,
    utf16_to_utf8_with_single_surrogates,
};

#[rstest]
#[case::empty(&[], &[])]
#[case::ascii(&[0x61], &[0x61])]
#[case::two_byte(&[0x65, 0x0301], &[0x65, 0xCC, 0x81])]
#[case::three_byte(&[0x2603], &[0xE2, 0x98, 0x83])]
#[case::pair_split(&[0xD83D, 0xDE39], &[0xED, 0xA0, 0xBD, 0xED, 0xB8, 0xB9])]
#[case::lone_high(&[0xD83D], &[0xED, 0xA0, 0xBD])]
#[case::lone_low(&[0xDE39], &[0xED, 0xB8, 0xB9])]
fn single_surrogates_vectors(#[case] input: &[u16], #[case] expected: &[u8]) {
    let mut out = Vec::new();
    utf16_to_utf8_with_single_surrogates(&mut out, input);
    assert_eq!(out, expected);

    // The lossless policy round-trips through the strict decoder.
    let mut back = Vec::new();
    utf8_with_surrogates_to_utf16(&mut back, &out).unwrap();
    assert_eq!(back, input);
}

#[rstest]
#[case::empty(&[], &[])]
#[case::ascii(&[0x61], &[0x61])]
#[case::pair_combined(&[0xD83D, 0xDE39], &[0xF0, 0x9F, 0x98, 0xB9])]
#[case::lone_high(&[0xD83D], &[0xEF, 0xBF, 0xBD])]
#[case::lone_low(&[0xDE39], &[0xEF, 0xBF, 0xBD])]
#[case::embedded_lone_high(&[0x61, 0xD83D, 0x62], &[0x61, 0xEF, 0xBF, 0xBD, 0x62])]
fn replacements_vectors(#[case] input: &[u16], #[case] expected: &[u8]) {
    let mut out = Vec::new();
    assert!(utf16_to_utf8_with_replacements(&mut out, input, None));
    assert_eq!(out, expected);
    // The replacements policy always emits valid UTF-8.
    std::str::from_utf8(&out).unwrap();
}

#[rstest]
#[case::truncated(&[0x61, 0x62, 0x63, 0x00, 0x64], 3, &[0x61, 0x62, 0x63], false)]
#[case::limit_above_input(&[0x61, 0x62, 0x63, 0x00, 0x64], 6, &[0x61, 0x62, 0x63, 0x00, 0x64], true)]
#[case::pair_counts_once(&[0xD83D, 0xDE39, 0xD83D, 0xDE39], 1, &[0xF0, 0x9F, 0x98, 0xB9], false)]
fn replacements_scalar_limit(
    #[case] input: &[u16],
    #[case] max_scalars: usize,
    #[case] expected: &[u8],
    #[case] expected_fully: bool,
) {
    let mut out = Vec::new();
    let fully = utf16_to_utf8_with_replacements(&mut out, input, Some(max_scalars));
    assert_eq!(out, expected);
    assert_eq!(fully, expected_fully);
}

#[rstest]
#[case::ascii("abc")]
#[case::mixed("Xé\u{2603}\u{1F639}")]
#[case::supplementary_only("\u{10000}\u{10FFFF}")]
fn stream_agrees_with_std_utf16(#[case] s: &str) {
    let expected: Vec<u16> = s.encode_utf16().collect();
    let from_bytes: Vec<u16> = Utf16Stream::from_utf8(s.as_bytes()).collect();
    assert_eq!(from_bytes, expected);
    let from_units: Vec<u16> = Utf16Stream::from_utf16(&expected).collect();
    assert_eq!(from_units, expected);
}

#[test]
fn encode_then_stream_back() {
    let units = [0x48u16, 0xD83D, 0xDE39, 0x21];
    let mut utf8 = Vec::new();
    assert!(utf16_to_utf8_with_replacements(&mut utf8, &units, None));
    let streamed: Vec<u16> = Utf16Stream::from_utf8(&utf8).collect();
    assert_eq!(streamed, units);
}
