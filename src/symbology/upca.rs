//! UPC-A encoder.
//!
//! A UPC-A symbol is an EAN-13 symbol whose implicit first digit is `0`, so
//! the first eleven digits are prefixed with `0` and handed to the EAN-13
//! assembler. A supplied 12th digit is discarded like EAN-13's 13th.

use super::ean13;
use super::{CharsetPolicy, Encoder, Symbology};
use crate::digits::{self, Digits};
use crate::encode::EncodeResult;
use crate::error::EncodeError;

/// UPC-A encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpcA;

impl UpcA {
    /// Encode an already validated 11-digit payload.
    ///
    /// The display text is the 13-digit EAN-13 form, leading `0` included.
    pub fn encode_digits(&self, payload: &Digits<11>) -> EncodeResult {
        let (pattern, code) = ean13::assemble(&payload.prepend(0));
        let code = code.to_string();
        EncodeResult::new(Symbology::UpcA, pattern, code.clone(), code)
    }
}

impl Encoder for UpcA {
    const SYMBOLOGY: Symbology = Symbology::UpcA;

    fn encode(&self, text: &str, _policy: CharsetPolicy) -> Result<EncodeResult, EncodeError> {
        let length = text.chars().count();
        if length != 11 && length != 12 {
            return Err(EncodeError::InvalidLength {
                symbology: Self::SYMBOLOGY,
                expected: Self::SYMBOLOGY.expected_length(),
                actual: length,
            });
        }
        digits::ensure_all_digits(text, Self::SYMBOLOGY)?;

        let payload = Digits::<11>::parse_prefix(text, Self::SYMBOLOGY)?;
        Ok(self.encode_digits(&payload))
    }
}
