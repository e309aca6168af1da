//! EAN-13 / UPC-A digit tables and guard patterns.

/// Left and right guard.
pub const END_GUARD: &str = "101";

/// Center guard between the left and right halves.
pub const CENTER_GUARD: &str = "01010";

/// Module width of every digit code.
pub const DIGIT_WIDTH: usize = 7;

/// Left-hand odd parity ("L") codes.
pub const L_CODES: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011",
    "0110001", "0101111", "0111011", "0110111", "0001011",
];

/// Left-hand even parity ("G") codes.
pub const G_CODES: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101",
    "0111001", "0000101", "0010001", "0001001", "0010111",
];

/// Right-hand ("R") codes.
pub const R_CODES: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100",
    "1001110", "1010000", "1000100", "1001000", "1110100",
];

/// Which left-hand code set a digit is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Odd parity, [`L_CODES`]
    L,
    /// Even parity, [`G_CODES`]
    G,
}

impl Parity {
    /// Code for `digit` in this parity set. `digit` must be 0-9.
    pub fn code(self, digit: u8) -> &'static str {
        match self {
            Parity::L => L_CODES[usize::from(digit)],
            Parity::G => G_CODES[usize::from(digit)],
        }
    }
}

use Parity::{G, L};

/// Parity of left-half digits 2-7, selected by the first (implicit) digit.
pub const FIRST_DIGIT_PARITY: [[Parity; 6]; 10] = [
    [L, L, L, L, L, L],
    [L, L, G, L, G, G],
    [L, L, G, G, L, G],
    [L, L, G, G, G, L],
    [L, G, L, L, G, G],
    [L, G, G, L, L, G],
    [L, G, G, G, L, L],
    [L, G, L, G, L, G],
    [L, G, L, G, G, L],
    [L, G, G, L, G, L],
];

/// Right-hand code for `digit`. `digit` must be 0-9.
pub fn right_code(digit: u8) -> &'static str {
    R_CODES[usize::from(digit)]
}
