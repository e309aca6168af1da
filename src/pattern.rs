//! # Module Patterns
//!
//! A [`ModulePattern`] is the encoded form of a linear barcode before it is
//! rasterized: an ordered sequence of modules where `1` is a bar and `0` a
//! space. Each symbology produces exactly one pattern per encode call and the
//! pattern is never mutated afterwards.
//!
//! ```
//! use linebar::{encode, Symbology};
//!
//! let result = encode("A", Symbology::Code128)?;
//! assert!(result.pattern.as_str().starts_with("11010010000"));
//! assert_eq!(result.pattern.runs().iter().sum::<usize>(), result.pattern.len());
//! # Ok::<(), linebar::EncodeError>(())
//! ```

use serde::Serialize;
use std::fmt;

/// Immutable sequence of bar (`1`) and space (`0`) modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModulePattern(String);

impl ModulePattern {
    /// The pattern as a string of `'0'` and `'1'` characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate modules in order, `true` for a bar.
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    /// Widths of the alternating runs, starting with the first run.
    ///
    /// Every symbology here starts with a bar, so even indices are bars and
    /// odd indices are spaces.
    pub fn runs(&self) -> Vec<usize> {
        let mut runs = Vec::new();
        let mut current: Option<(bool, usize)> = None;
        for module in self.modules() {
            current = match current {
                Some((kind, width)) if kind == module => Some((kind, width + 1)),
                Some((_, width)) => {
                    runs.push(width);
                    Some((module, 1))
                }
                None => Some((module, 1)),
            };
        }
        if let Some((_, width)) = current {
            runs.push(width);
        }
        runs
    }
}

impl fmt::Display for ModulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Append-only assembler used by the encoders.
///
/// Only ever fed table entries, so the buffer holds nothing but `0` and `1`.
#[derive(Debug, Default)]
pub(crate) struct PatternBuilder {
    modules: String,
}

impl PatternBuilder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            modules: String::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, modules: &str) {
        debug_assert!(modules.bytes().all(|b| b == b'0' || b == b'1'));
        self.modules.push_str(modules);
    }

    pub(crate) fn finish(self) -> ModulePattern {
        ModulePattern(self.modules)
    }
}
