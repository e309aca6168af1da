//! # Linebar - Linear Barcode Encoder
//!
//! Linebar turns text into the module pattern of a linear (1-D) barcode:
//! an ordered sequence of bars (`1`) and spaces (`0`) plus the human-readable
//! text printed beneath it. It provides:
//!
//! - **Encoders**: Code 128 (subset B), EAN-13, UPC-A and Code 39
//! - **Checksums**: Code 128 mod 103 and EAN/UPC mod 10 check digits
//! - **Rendering**: a reference rasterizer producing PNG images
//! - **Server**: a JSON-over-HTTP encode API
//!
//! ## Quick Start
//!
//! ```
//! use linebar::{encode, Symbology};
//!
//! let result = encode("Hello", Symbology::Code128)?;
//! assert!(result.pattern.as_str().starts_with("11010010000"));
//! assert!(result.pattern.as_str().ends_with("1100011101011"));
//! assert_eq!(result.display_text, "Hello");
//!
//! # Ok::<(), linebar::EncodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`encode`] | Dispatcher: request in, pattern + display text out |
//! | [`symbology`] | Symbology enum and the four encoders |
//! | [`tables`] | Static symbol tables |
//! | [`checksum`] | Check symbol algorithms |
//! | [`digits`] | Validated digit arrays for numeric symbologies |
//! | [`pattern`] | The immutable module pattern |
//! | [`render`] | Pattern rasterization and PNG export |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |
//!
//! ## Unsupported Characters
//!
//! Code 128 and Code 39 skip characters missing from their tables by
//! default (a warning is logged). Use [`encode_with_policy`] with
//! [`CharsetPolicy::Reject`] to fail instead.

pub mod checksum;
pub mod digits;
pub mod encode;
pub mod error;
pub mod pattern;
pub mod render;
pub mod server;
pub mod symbology;
pub mod tables;

// Re-exports for convenience
pub use encode::{EncodeRequest, EncodeResult, encode, encode_with_policy};
pub use error::{EncodeError, LinebarError};
pub use pattern::ModulePattern;
pub use symbology::{CharsetPolicy, Symbology};
