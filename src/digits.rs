//! Validated decimal digit sequences.
//!
//! Numeric symbologies never see raw text: their input is parsed into a
//! [`Digits`] array first, so every value an encoder indexes a table with is
//! known to be in `0..=9`.

use std::fmt;

use crate::error::EncodeError;
use crate::symbology::Symbology;

/// Fixed-length array of decimal digits, each in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits<const N: usize>([u8; N]);

impl<const N: usize> Digits<N> {
    /// Wrap digit values, returning `None` if any value exceeds 9.
    pub fn new(values: [u8; N]) -> Option<Self> {
        values.iter().all(|&d| d <= 9).then_some(Self(values))
    }

    /// Parse the first `N` characters of `text`.
    ///
    /// Characters past `N` are ignored. Fails with
    /// [`EncodeError::InvalidLength`] when `text` is shorter than `N`, or with
    /// [`EncodeError::UnsupportedCharacter`] at the first non-digit.
    pub fn parse_prefix(text: &str, symbology: Symbology) -> Result<Self, EncodeError> {
        let mut values = [0u8; N];
        let mut count = 0;
        for (position, character) in text.chars().take(N).enumerate() {
            values[position] = to_digit(character, position, symbology)?;
            count += 1;
        }
        if count < N {
            return Err(EncodeError::InvalidLength {
                symbology,
                expected: symbology.expected_length(),
                actual: count,
            });
        }
        Ok(Self(values))
    }

    pub fn as_array(&self) -> &[u8; N] {
        &self.0
    }

    /// Append one digit, producing an array one longer.
    ///
    /// `M` must equal `N + 1`; any other length is a programming error.
    pub fn push<const M: usize>(&self, digit: u8) -> Digits<M> {
        assert_eq!(M, N + 1, "Digits::push must grow by exactly one");
        debug_assert!(digit <= 9);
        let mut values = [0u8; M];
        values[..N].copy_from_slice(&self.0);
        values[N] = digit;
        Digits(values)
    }

    /// Prepend one digit, producing an array one longer.
    pub fn prepend<const M: usize>(&self, digit: u8) -> Digits<M> {
        assert_eq!(M, N + 1, "Digits::prepend must grow by exactly one");
        debug_assert!(digit <= 9);
        let mut values = [0u8; M];
        values[0] = digit;
        values[1..].copy_from_slice(&self.0);
        Digits(values)
    }
}

impl<const N: usize> fmt::Display for Digits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Reject any non-digit character in `text`.
pub(crate) fn ensure_all_digits(text: &str, symbology: Symbology) -> Result<(), EncodeError> {
    for (position, character) in text.chars().enumerate() {
        to_digit(character, position, symbology)?;
    }
    Ok(())
}

fn to_digit(character: char, position: usize, symbology: Symbology) -> Result<u8, EncodeError> {
    character
        .to_digit(10)
        .map(|d| d as u8)
        .ok_or(EncodeError::UnsupportedCharacter {
            symbology,
            character,
            position,
        })
}
