//! # Symbol Tables
//!
//! Static lookup tables mapping characters or digits to their fixed-width
//! module strings.
//!
//! | Table | Key | Width |
//! |-------|-----|-------|
//! | [`code128`] | symbol value 0-105 | 11 modules (stop: 13) |
//! | [`code39`] | `0-9`, `A-Z`, space, `-`, `.`, `*` | 12 modules |
//! | [`ean`] | digit 0-9 in L, G and R sets | 7 modules |
//!
//! All tables are `const` data: they are shared by every encode call without
//! synchronization and never change.

pub mod code128;
pub mod code39;
pub mod ean;
