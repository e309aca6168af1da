//! # Symbologies
//!
//! The closed set of supported linear symbologies and their encoders.
//!
//! | Symbology | Input | Check symbol | Encoder |
//! |-----------|-------|--------------|---------|
//! | Code 128 (subset B) | printable ASCII | mod 103 | [`Code128`] |
//! | EAN-13 | 12 or 13 digits | mod 10 (always derived) | [`Ean13`] |
//! | UPC-A | 11 or 12 digits | via EAN-13 | [`UpcA`] |
//! | Code 39 | `0-9 A-Z - .` and space | none | [`Code39`] |
//!
//! Each encoder is a unit struct implementing [`Encoder`]; [`Symbology`]
//! dispatches to them with a plain `match`.

mod code128;
mod code39;
mod ean13;
mod upca;

pub use code128::Code128;
pub use code39::Code39;
pub use ean13::{EAN13_MODULES, Ean13};
pub use upca::UpcA;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::encode::EncodeResult;
use crate::error::{EncodeError, ParseSymbologyError};

/// A linear barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    /// Code 128, subset B
    #[default]
    Code128,
    /// EAN-13 / JAN-13
    Ean13,
    /// UPC-A, encoded as an EAN-13 with leading zero
    UpcA,
    /// Code 39 without check character
    Code39,
}

impl Symbology {
    /// All supported symbologies.
    pub const ALL: [Symbology; 4] = [
        Symbology::Code128,
        Symbology::Ean13,
        Symbology::UpcA,
        Symbology::Code39,
    ];

    /// Identifier used on the CLI and in JSON requests.
    pub fn name(self) -> &'static str {
        match self {
            Symbology::Code128 => "code128",
            Symbology::Ean13 => "ean13",
            Symbology::UpcA => "upca",
            Symbology::Code39 => "code39",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Symbology::Code128 => "Code 128",
            Symbology::Ean13 => "EAN-13",
            Symbology::UpcA => "UPC-A",
            Symbology::Code39 => "Code 39",
        }
    }

    /// Accepted input lengths, for error messages.
    pub fn expected_length(self) -> &'static str {
        match self {
            Symbology::Ean13 => "12 or 13",
            Symbology::UpcA => "11 or 12",
            Symbology::Code128 | Symbology::Code39 => "any number of",
        }
    }

    /// Parse a symbology name, falling back to Code 128 when it is
    /// missing or unknown.
    pub fn from_name_or_default(name: Option<&str>) -> Symbology {
        match name {
            None => Symbology::default(),
            Some(name) => name.parse().unwrap_or_else(|e: ParseSymbologyError| {
                tracing::warn!(error = %e, "falling back to {}", Symbology::default());
                Symbology::default()
            }),
        }
    }

    /// Encode `text` with this symbology's encoder.
    pub fn encode(self, text: &str, policy: CharsetPolicy) -> Result<EncodeResult, EncodeError> {
        match self {
            Symbology::Code128 => Code128.encode(text, policy),
            Symbology::Ean13 => Ean13.encode(text, policy),
            Symbology::UpcA => UpcA.encode(text, policy),
            Symbology::Code39 => Code39.encode(text, policy),
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symbology {
    type Err = ParseSymbologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code128" | "code-128" => Ok(Symbology::Code128),
            "ean13" | "ean-13" => Ok(Symbology::Ean13),
            "upca" | "upc-a" => Ok(Symbology::UpcA),
            "code39" | "code-39" => Ok(Symbology::Code39),
            _ => Err(ParseSymbologyError(s.to_string())),
        }
    }
}

/// What to do with a character the symbology's table cannot encode.
///
/// Applies to Code 128 and Code 39. Numeric symbologies always reject
/// non-digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharsetPolicy {
    /// Drop the character and log a warning
    #[default]
    Skip,
    /// Fail the whole encode with [`EncodeError::UnsupportedCharacter`]
    Reject,
}

impl CharsetPolicy {
    /// Apply the policy to an unencodable character.
    ///
    /// Returns `Ok(())` when the character should be skipped.
    pub(crate) fn unsupported(
        self,
        symbology: Symbology,
        character: char,
        position: usize,
    ) -> Result<(), EncodeError> {
        match self {
            CharsetPolicy::Skip => {
                tracing::warn!(%symbology, ?character, position, "skipping unsupported character");
                Ok(())
            }
            CharsetPolicy::Reject => Err(EncodeError::UnsupportedCharacter {
                symbology,
                character,
                position,
            }),
        }
    }
}

/// Shared capability of the four encoders.
pub trait Encoder {
    /// The symbology this encoder produces.
    const SYMBOLOGY: Symbology;

    /// Encode `text` into a module pattern and display text.
    fn encode(&self, text: &str, policy: CharsetPolicy) -> Result<EncodeResult, EncodeError>;
}
