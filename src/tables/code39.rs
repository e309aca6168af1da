//! Code 39 symbol table.
//!
//! Each character is nine elements (five bars, four spaces), three of them
//! wide. With narrow = 1 module and wide = 2 modules every entry is 12
//! modules long, starting and ending with a bar.

/// Start/stop character pattern (`*`).
pub const START_STOP: &str = "100101101101";

/// Narrow space placed between adjacent characters.
pub const GAP: &str = "0";

/// Module width of every character.
pub const SYMBOL_WIDTH: usize = 12;

const TABLE: [(char, &str); 39] = [
    ('0', "101001101101"),
    ('1', "110100101011"),
    ('2', "101100101011"),
    ('3', "110110010101"),
    ('4', "101001101011"),
    ('5', "110100110101"),
    ('6', "101100110101"),
    ('7', "101001011011"),
    ('8', "110100101101"),
    ('9', "101100101101"),
    ('A', "110101001011"),
    ('B', "101101001011"),
    ('C', "110110100101"),
    ('D', "101011001011"),
    ('E', "110101100101"),
    ('F', "101101100101"),
    ('G', "101010011011"),
    ('H', "110101001101"),
    ('I', "101101001101"),
    ('J', "101011001101"),
    ('K', "110101010011"),
    ('L', "101101010011"),
    ('M', "110110101001"),
    ('N', "101011010011"),
    ('O', "110101101001"),
    ('P', "101101101001"),
    ('Q', "101010110011"),
    ('R', "110101011001"),
    ('S', "101101011001"),
    ('T', "101011011001"),
    ('U', "110010101011"),
    ('V', "100110101011"),
    ('W', "110011010101"),
    ('X', "100101101011"),
    ('Y', "110010110101"),
    ('Z', "100110110101"),
    ('-', "100101011011"),
    ('.', "110010101101"),
    (' ', "100110101101"),
];

/// Pattern for an upper-case character, `None` if it is not encodable.
///
/// `*` is reserved for start/stop and is not a data character.
pub fn lookup(ch: char) -> Option<&'static str> {
    TABLE
        .iter()
        .find(|(key, _)| *key == ch)
        .map(|(_, pattern)| *pattern)
}
