//! # Checksum Engines
//!
//! Check symbol algorithms for the symbologies that carry one.
//!
//! | Symbology | Algorithm |
//! |-----------|-----------|
//! | Code 128 | start value + Σ value × position, mod 103 |
//! | EAN-13 / UPC-A | Σ digit × (1, 3, 1, 3, ...), check = (10 - Σ mod 10) mod 10 |
//!
//! Code 39 is encoded without its optional mod-43 check character.

use crate::digits::Digits;

/// Code 128 check value modulus.
pub const CODE128_MODULUS: u32 = 103;

/// Running Code 128 checksum.
///
/// Seeded with the start symbol value; each data symbol is weighted by its
/// 1-based position among the encoded symbols.
///
/// ```
/// use linebar::checksum::Code128Checksum;
///
/// let mut checksum = Code128Checksum::new(104);
/// checksum.push(33); // 'A'
/// assert_eq!(checksum.finish(), 34);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Code128Checksum {
    sum: u32,
    position: u32,
}

impl Code128Checksum {
    pub fn new(start_value: u8) -> Self {
        Self {
            sum: u32::from(start_value),
            position: 0,
        }
    }

    pub fn push(&mut self, value: u8) {
        self.position += 1;
        self.sum = (self.sum + u32::from(value) * self.position) % CODE128_MODULUS;
    }

    /// Check symbol value, always in `0..103`.
    pub fn finish(&self) -> u8 {
        (self.sum % CODE128_MODULUS) as u8
    }
}

/// Code 128 check value for a start value followed by data values.
pub fn code128(start_value: u8, values: &[u8]) -> u8 {
    let mut checksum = Code128Checksum::new(start_value);
    for &value in values {
        checksum.push(value);
    }
    checksum.finish()
}

/// EAN-13 check digit for the first twelve digits.
pub fn ean13_check_digit(payload: &Digits<12>) -> u8 {
    let sum: u32 = payload
        .as_array()
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Whether a full 13-digit EAN-13 carries a consistent check digit.
pub fn ean13_is_valid(code: &Digits<13>) -> bool {
    let digits = code.as_array();
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    sum % 10 == 0
}
