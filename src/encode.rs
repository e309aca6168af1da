//! # Encoding Dispatcher
//!
//! Entry point of the library: routes text to the encoder for the requested
//! symbology and returns the module pattern plus its display text.
//!
//! ```
//! use linebar::{encode, EncodeError, Symbology};
//!
//! let result = encode("590123412345", Symbology::Ean13)?;
//! assert_eq!(result.display_text, "5901234123457");
//! assert_eq!(result.pattern.len(), 95);
//!
//! let err = encode("1234567890", Symbology::Ean13).unwrap_err();
//! assert!(matches!(err, EncodeError::InvalidLength { .. }));
//! # Ok::<(), EncodeError>(())
//! ```
//!
//! Encoding is a pure function of its input and the static tables, so any
//! number of threads may call it concurrently.

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::pattern::ModulePattern;
use crate::symbology::{CharsetPolicy, Symbology};

/// Successful encode: what a renderer needs to draw the barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeResult {
    pub symbology: Symbology,
    pub pattern: ModulePattern,
    /// Human-readable text printed beneath the bars
    pub display_text: String,
    /// The characters the pattern actually carries, as a scanner reads them
    pub encoded_text: String,
}

impl EncodeResult {
    pub(crate) fn new(
        symbology: Symbology,
        pattern: ModulePattern,
        display_text: String,
        encoded_text: String,
    ) -> Self {
        Self {
            symbology,
            pattern,
            display_text,
            encoded_text,
        }
    }
}

/// Encode request as received at the outer boundary (CLI, JSON).
///
/// The symbology is kept as a free-form name: a missing or unrecognized name
/// selects Code 128.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EncodeRequest {
    pub text: String,
    #[serde(default)]
    pub symbology: Option<String>,
    #[serde(default)]
    pub policy: CharsetPolicy,
}

impl EncodeRequest {
    pub fn new(text: impl Into<String>, symbology: Symbology) -> Self {
        Self {
            text: text.into(),
            symbology: Some(symbology.name().to_string()),
            policy: CharsetPolicy::default(),
        }
    }

    /// Reject unsupported characters instead of skipping them.
    pub fn strict(mut self) -> Self {
        self.policy = CharsetPolicy::Reject;
        self
    }

    /// The symbology this request resolves to.
    pub fn symbology(&self) -> Symbology {
        Symbology::from_name_or_default(self.symbology.as_deref())
    }

    pub fn encode(&self) -> Result<EncodeResult, EncodeError> {
        encode_with_policy(&self.text, self.symbology(), self.policy)
    }
}

/// Encode `text`, skipping characters the symbology cannot represent.
pub fn encode(text: &str, symbology: Symbology) -> Result<EncodeResult, EncodeError> {
    encode_with_policy(text, symbology, CharsetPolicy::Skip)
}

/// Encode `text` with an explicit unsupported-character policy.
pub fn encode_with_policy(
    text: &str,
    symbology: Symbology,
    policy: CharsetPolicy,
) -> Result<EncodeResult, EncodeError> {
    let result = symbology.encode(text, policy)?;
    tracing::debug!(
        %symbology,
        modules = result.pattern.len(),
        display = %result.display_text,
        "encoded"
    );
    Ok(result)
}
