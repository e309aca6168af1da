//! EAN-13 encoder.
//!
//! ```text
//! 101 | 6 left digits (L/G) | 01010 | 6 right digits (R) | 101
//!  3  |       6 x 7         |   5   |       6 x 7        |  3   = 95 modules
//! ```
//!
//! The first digit is not drawn; it selects the L/G parity of the six
//! left-hand digits.

use super::{CharsetPolicy, Encoder, Symbology};
use crate::checksum;
use crate::digits::{self, Digits};
use crate::encode::EncodeResult;
use crate::error::EncodeError;
use crate::pattern::{ModulePattern, PatternBuilder};
use crate::tables::ean::{self, CENTER_GUARD, END_GUARD, FIRST_DIGIT_PARITY};

/// Total modules in an EAN-13 / UPC-A symbol.
pub const EAN13_MODULES: usize = 95;

/// EAN-13 encoder.
///
/// Accepts 12 or 13 digits. A 13th digit is discarded and the check digit
/// is always recomputed from the first twelve.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ean13;

impl Ean13 {
    /// Encode an already validated 12-digit payload.
    pub fn encode_digits(&self, payload: &Digits<12>) -> EncodeResult {
        let (pattern, code) = assemble(payload);
        let code = code.to_string();
        EncodeResult::new(Symbology::Ean13, pattern, code.clone(), code)
    }
}

impl Encoder for Ean13 {
    const SYMBOLOGY: Symbology = Symbology::Ean13;

    fn encode(&self, text: &str, _policy: CharsetPolicy) -> Result<EncodeResult, EncodeError> {
        let length = text.chars().count();
        if length != 12 && length != 13 {
            return Err(EncodeError::InvalidLength {
                symbology: Self::SYMBOLOGY,
                expected: Self::SYMBOLOGY.expected_length(),
                actual: length,
            });
        }
        digits::ensure_all_digits(text, Self::SYMBOLOGY)?;

        let payload = Digits::<12>::parse_prefix(text, Self::SYMBOLOGY)?;
        if length == 13 {
            let supplied = Digits::<13>::parse_prefix(text, Self::SYMBOLOGY)?;
            if !checksum::ean13_is_valid(&supplied) {
                tracing::debug!(
                    input = text,
                    derived = checksum::ean13_check_digit(&payload),
                    "replacing supplied check digit"
                );
            }
        }

        Ok(self.encode_digits(&payload))
    }
}

/// Build the 95-module pattern and the full 13-digit code for a payload.
pub(crate) fn assemble(payload: &Digits<12>) -> (ModulePattern, Digits<13>) {
    let code: Digits<13> = payload.push(checksum::ean13_check_digit(payload));
    let digits = code.as_array();
    let parity = &FIRST_DIGIT_PARITY[usize::from(digits[0])];

    let mut builder = PatternBuilder::with_capacity(EAN13_MODULES);
    builder.push(END_GUARD);
    for (&digit, set) in digits[1..7].iter().zip(parity) {
        builder.push(set.code(digit));
    }
    builder.push(CENTER_GUARD);
    for &digit in &digits[7..13] {
        builder.push(ean::right_code(digit));
    }
    builder.push(END_GUARD);

    (builder.finish(), code)
}
