//! # Encoding Tests
//!
//! End-to-end checks of the public encode API against the structural grammar
//! of each symbology.
//!
//! ## Test Coverage
//!
//! - **Determinism**: repeated encodes are identical
//! - **Checksums**: EAN-13 check digits balance the weighted sum
//! - **Structure**: guards, start/stop symbols, symbol widths
//! - **Rejection**: invalid lengths and characters fail without output

use linebar::checksum;
use linebar::digits::Digits;
use linebar::symbology::EAN13_MODULES;
use linebar::tables::{code128, code39, ean};
use linebar::{CharsetPolicy, EncodeError, EncodeRequest, Symbology, encode, encode_with_policy};
use pretty_assertions::assert_eq;

const CODE128_START_B: &str = "11010010000";
const CODE128_STOP: &str = "1100011101011";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn pattern(text: &str, symbology: Symbology) -> String {
    encode(text, symbology).unwrap().pattern.to_string()
}

/// Split an EAN-13 pattern into its 12 digit codes, checking the guards.
fn ean13_digit_codes(p: &str) -> Vec<&str> {
    assert_eq!(p.len(), EAN13_MODULES);
    assert_eq!(&p[..3], "101");
    assert_eq!(&p[45..50], "01010");
    assert_eq!(&p[92..], "101");
    let left = (0..6).map(|i| &p[3 + i * 7..10 + i * 7]);
    let right = (0..6).map(|i| &p[50 + i * 7..57 + i * 7]);
    left.chain(right).collect()
}

/// Decode an EAN-13 pattern back to its 13 digits.
fn decode_ean13(p: &str) -> String {
    let codes = ean13_digit_codes(p);
    let mut parity = Vec::new();
    let mut digits = String::new();
    for code in &codes[..6] {
        if let Some(d) = ean::L_CODES.iter().position(|c| c == code) {
            parity.push(ean::Parity::L);
            digits.push(char::from(b'0' + d as u8));
        } else {
            let d = ean::G_CODES.iter().position(|c| c == code).expect("left code");
            parity.push(ean::Parity::G);
            digits.push(char::from(b'0' + d as u8));
        }
    }
    for code in &codes[6..] {
        let d = ean::R_CODES.iter().position(|c| c == code).expect("right code");
        digits.push(char::from(b'0' + d as u8));
    }
    let first = ean::FIRST_DIGIT_PARITY
        .iter()
        .position(|row| row[..] == parity[..])
        .expect("parity row");
    format!("{}{}", first, digits)
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn test_determinism() {
    let inputs = [
        ("Hello, World!", Symbology::Code128),
        ("590123412345", Symbology::Ean13),
        ("03600029145", Symbology::UpcA),
        ("CODE-39.", Symbology::Code39),
    ];
    for (text, symbology) in inputs {
        assert_eq!(encode(text, symbology), encode(text, symbology));
    }
}

#[test]
fn test_concurrent_encodes_agree() {
    let expected = pattern("concurrent", Symbology::Code128);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| pattern("concurrent", Symbology::Code128)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ============================================================================
// EAN-13 / UPC-A
// ============================================================================

#[test]
fn test_ean13_checksum_balances() {
    let result = encode("400101010000", Symbology::Ean13).unwrap();
    let digits: Vec<u32> = result
        .display_text
        .chars()
        .map(|c| c.to_digit(10).unwrap())
        .collect();
    let weighted: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, d)| d * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    assert_eq!((weighted + digits[12]) % 10, 0);
}

#[test]
fn test_ean13_decodes_to_display_text() {
    for text in ["590123412345", "400638133393", "978020137962", "123456789012"] {
        let result = encode(text, Symbology::Ean13).unwrap();
        assert_eq!(decode_ean13(result.pattern.as_str()), result.display_text);
        assert!(result.display_text.starts_with(text));
    }
}

#[test]
fn test_every_first_digit_structure() {
    for first in 0..10u8 {
        let text = format!("{}12345678901", first);
        let result = encode(&text, Symbology::Ean13).unwrap();
        let decoded = decode_ean13(result.pattern.as_str());
        assert_eq!(decoded, result.display_text);
        let full = Digits::<13>::parse_prefix(&decoded, Symbology::Ean13).unwrap();
        assert!(checksum::ean13_is_valid(&full));
    }
}

#[test]
fn test_ean13_repeated_digits() {
    // First digit 0 selects all-L parity; the check digit is also 0
    let result = encode("000000000000", Symbology::Ean13).unwrap();
    assert_eq!(result.display_text, "0000000000000");
    let codes = ean13_digit_codes(result.pattern.as_str());
    assert!(codes[..6].iter().all(|c| *c == ean::L_CODES[0]));
    assert!(codes[6..].iter().all(|c| *c == ean::R_CODES[0]));

    let sevens = encode("777777777777", Symbology::Ean13).unwrap();
    let codes = ean13_digit_codes(sevens.pattern.as_str());
    assert_eq!(decode_ean13(sevens.pattern.as_str()), sevens.display_text);
    // Right half is 7,7,7,7,7 then check digit 2
    assert!(codes[7..11].iter().all(|c| *c == codes[6]));
    assert_eq!(codes[11], ean::R_CODES[2]);
}

#[test]
fn test_upca_reduces_to_ean13() {
    assert_eq!(
        pattern("01234567890", Symbology::UpcA),
        pattern("001234567890", Symbology::Ean13)
    );
}

#[test]
fn test_upca_structure() {
    let result = encode("036000291452", Symbology::UpcA).unwrap();
    ean13_digit_codes(result.pattern.as_str());
    assert_eq!(decode_ean13(result.pattern.as_str()), "0036000291452");
}

#[test]
fn test_length_rejection() {
    for text in ["1234567890", "123456789012345"] {
        assert!(matches!(
            encode(text, Symbology::Ean13),
            Err(EncodeError::InvalidLength {
                symbology: Symbology::Ean13,
                ..
            })
        ));
    }
    assert!(matches!(
        encode("123456789012", Symbology::UpcA).map(|r| r.display_text.len()),
        Ok(13)
    ));
    assert!(matches!(
        encode("1234567890123", Symbology::UpcA),
        Err(EncodeError::InvalidLength { actual: 13, .. })
    ));
}

// ============================================================================
// CODE 128
// ============================================================================

#[test]
fn test_code128_start_and_stop() {
    for text in ["", "a", "Hello, World!", "~~~", "\u{1F600}"] {
        let p = pattern(text, Symbology::Code128);
        assert!(p.starts_with(CODE128_START_B), "{:?}", text);
        assert!(p.ends_with(CODE128_STOP), "{:?}", text);
        assert_eq!((p.len() - CODE128_STOP.len()) % code128::SYMBOL_WIDTH, 0);
    }
}

#[test]
fn test_code128_check_symbol() {
    let text = "PJJ123C";
    let p = pattern(text, Symbology::Code128);
    let values: Vec<u8> = text.chars().map(|c| code128::value_of(c).unwrap()).collect();
    let check = checksum::code128(code128::START_B, &values);
    let check_start = (1 + values.len()) * code128::SYMBOL_WIDTH;
    assert_eq!(&p[check_start..check_start + 11], code128::pattern(check));
}

#[test]
fn test_code128_data_symbols() {
    let p = pattern("Az~", Symbology::Code128);
    assert_eq!(&p[11..22], code128::lookup('A').unwrap());
    assert_eq!(&p[22..33], code128::lookup('z').unwrap());
    assert_eq!(&p[33..44], code128::lookup('~').unwrap());
}

#[test]
fn test_code128_repeated_char() {
    let p = pattern("xx", Symbology::Code128);
    assert_eq!(&p[11..22], &p[22..33]);
}

// ============================================================================
// CODE 39
// ============================================================================

#[test]
fn test_code39_framing() {
    let p = pattern("AB 12", Symbology::Code39);
    assert!(p.starts_with(code39::START_STOP));
    assert!(p.ends_with(code39::START_STOP));
    // symbol + narrow gap per character
    for (i, ch) in "AB 12".chars().enumerate() {
        let start = (i + 1) * (code39::SYMBOL_WIDTH + 1);
        assert_eq!(&p[start - 1..start], "0");
        assert_eq!(&p[start..start + 12], code39::lookup(ch).unwrap());
    }
}

#[test]
fn test_code39_repeated_char() {
    let p = pattern("QQ", Symbology::Code39);
    assert_eq!(&p[13..25], &p[26..38]);
}

// ============================================================================
// CHARACTER POLICY
// ============================================================================

#[test]
fn test_skip_vs_reject() {
    let skipped = encode_with_policy("AB\u{00E9}C", Symbology::Code128, CharsetPolicy::Skip).unwrap();
    assert_eq!(skipped.display_text, "AB\u{00E9}C");
    assert_eq!(skipped.encoded_text, "ABC");
    assert_eq!(skipped.pattern.to_string(), pattern("ABC", Symbology::Code128));

    let rejected = encode_with_policy("AB\u{00E9}C", Symbology::Code128, CharsetPolicy::Reject);
    assert_eq!(
        rejected,
        Err(EncodeError::UnsupportedCharacter {
            symbology: Symbology::Code128,
            character: '\u{00E9}',
            position: 2,
        })
    );
}

#[test]
fn test_request_round_trip_through_json() {
    let request: EncodeRequest =
        serde_json::from_str(r#"{"text": "036000291452", "symbology": "upc-a"}"#).unwrap();
    let result = request.encode().unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["symbology"], "upca");
    assert_eq!(json["display_text"], "0036000291452");
}
