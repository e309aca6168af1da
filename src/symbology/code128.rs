//! Code 128 subset B encoder.
//!
//! ```text
//! START-B | data symbols ... | check symbol | STOP
//!   11    |    11 each       |      11      |  13
//! ```

use super::{CharsetPolicy, Encoder, Symbology};
use crate::checksum::Code128Checksum;
use crate::encode::EncodeResult;
use crate::error::EncodeError;
use crate::pattern::PatternBuilder;
use crate::tables::code128::{self, START_B, STOP, SYMBOL_WIDTH};

/// Code 128 encoder restricted to subset B (space through tilde).
#[derive(Debug, Clone, Copy, Default)]
pub struct Code128;

impl Encoder for Code128 {
    const SYMBOLOGY: Symbology = Symbology::Code128;

    fn encode(&self, text: &str, policy: CharsetPolicy) -> Result<EncodeResult, EncodeError> {
        let mut builder = PatternBuilder::with_capacity((text.len() + 2) * SYMBOL_WIDTH + STOP.len());
        let mut checksum = Code128Checksum::new(START_B);
        let mut accepted = String::with_capacity(text.len());

        builder.push(code128::pattern(START_B));
        for (position, ch) in text.chars().enumerate() {
            match code128::value_of(ch) {
                Some(value) => {
                    builder.push(code128::pattern(value));
                    checksum.push(value);
                    accepted.push(ch);
                }
                None => policy.unsupported(Self::SYMBOLOGY, ch, position)?,
            }
        }
        builder.push(code128::pattern(checksum.finish()));
        builder.push(STOP);

        Ok(EncodeResult::new(
            Self::SYMBOLOGY,
            builder.finish(),
            text.to_string(),
            accepted,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "11010010000";

    fn pattern(text: &str) -> String {
        Code128
            .encode(text, CharsetPolicy::Skip)
            .unwrap()
            .pattern
            .to_string()
    }

    #[test]
    fn test_empty_input() {
        // Check value for no data is 104 mod 103 = 1 ('!')
        let expected = format!("{}{}{}", START, "11001101100", STOP);
        assert_eq!(pattern(""), expected);
    }

    #[test]
    fn test_single_char() {
        // 'A' = 33, check = (104 + 33) mod 103 = 34
        let expected = format!("{}{}{}{}", START, "10100011000", "10001011000", STOP);
        assert_eq!(pattern("A"), expected);
    }

    #[test]
    fn test_high_check_value_is_encoded() {
        // '~' = 94, check = (104 + 94) mod 103 = 95, which has no subset B character
        let result = pattern("~");
        assert_eq!(result.len(), 11 * 3 + 13);
        assert_eq!(&result[22..33], "10111101000");
    }

    #[test]
    fn test_skip_keeps_positions_dense() {
        // Skipped characters do not consume a checksum position
        assert_eq!(pattern("A\u{e9}B"), pattern("AB"));
    }

    #[test]
    fn test_skip_display_text() {
        // Display keeps the input as typed; the pattern carries only subset B
        let result = Code128.encode("caf\u{e9}!", CharsetPolicy::Skip).unwrap();
        assert_eq!(result.display_text, "caf\u{e9}!");
        assert_eq!(result.encoded_text, "caf!");
    }

    #[test]
    fn test_reject_policy() {
        let err = Code128.encode("tab\there", CharsetPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnsupportedCharacter {
                symbology: Symbology::Code128,
                character: '\t',
                position: 3,
            }
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(pattern("a"), pattern("A"));
    }
}
