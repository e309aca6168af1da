//! Code 39 encoder (no check character).
//!
//! ```text
//! * | gap | char | gap | char ... | gap | *
//! ```

use super::{CharsetPolicy, Encoder, Symbology};
use crate::encode::EncodeResult;
use crate::error::EncodeError;
use crate::pattern::PatternBuilder;
use crate::tables::code39::{self, GAP, START_STOP, SYMBOL_WIDTH};

/// Code 39 encoder. Input is upper-cased before lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Code39;

impl Encoder for Code39 {
    const SYMBOLOGY: Symbology = Symbology::Code39;

    fn encode(&self, text: &str, policy: CharsetPolicy) -> Result<EncodeResult, EncodeError> {
        let mut builder = PatternBuilder::with_capacity((text.len() + 2) * (SYMBOL_WIDTH + 1));
        let mut accepted = String::with_capacity(text.len());

        builder.push(START_STOP);
        for (position, ch) in text.chars().enumerate() {
            // ASCII-only folding: no non-ASCII letter has a Code 39 symbol
            let upper = ch.to_ascii_uppercase();
            match code39::lookup(upper) {
                Some(modules) => {
                    builder.push(GAP);
                    builder.push(modules);
                    accepted.push(upper);
                }
                None => policy.unsupported(Self::SYMBOLOGY, ch, position)?,
            }
        }
        builder.push(GAP);
        builder.push(START_STOP);

        Ok(EncodeResult::new(
            Self::SYMBOLOGY,
            builder.finish(),
            text.to_string(),
            accepted,
        ))
    }
}
