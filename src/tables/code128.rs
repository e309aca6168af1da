//! Code 128 symbol table.
//!
//! Patterns are indexed by symbol value. In subset B a printable ASCII
//! character `c` (space through tilde) has value `c - 32`; values 95-102 are
//! shift/function codes and 103-105 the start codes.

/// Value of the Start B symbol, also the checksum seed.
pub const START_B: u8 = 104;

/// Stop pattern (13 modules, includes the final bar).
pub const STOP: &str = "1100011101011";

/// Module width of every non-stop symbol.
pub const SYMBOL_WIDTH: usize = 11;

const PATTERNS: [&str; 106] = [
    // 0-9: space ! " # $ % & ' ( )
    "11011001100", "11001101100", "11001100110", "10010011000", "10010001100",
    "10001001100", "10011001000", "10011000100", "10001100100", "11001001000",
    // 10-19: * + , - . / 0 1 2 3
    "11001000100", "11000100100", "10110011100", "10011011100", "10011001110",
    "10111001100", "10011101100", "10011100110", "11001110010", "11001011100",
    // 20-29: 4 5 6 7 8 9 : ; < =
    "11001001110", "11011100100", "11001110100", "11101101110", "11101001100",
    "11100101100", "11100100110", "11101100100", "11100110100", "11100110010",
    // 30-39: > ? @ A B C D E F G
    "11011011000", "11011000110", "11000110110", "10100011000", "10001011000",
    "10001000110", "10110001000", "10001101000", "10001100010", "11010001000",
    // 40-49: H I J K L M N O P Q
    "11000101000", "11000100010", "10110111000", "10110001110", "10001101110",
    "10111011000", "10111000110", "10001110110", "11101110110", "11010001110",
    // 50-59: R S T U V W X Y Z [
    "11000101110", "11011101000", "11011100010", "11011101110", "11101011000",
    "11101000110", "11100010110", "11101101000", "11101100010", "11100011010",
    // 60-69: \ ] ^ _ ` a b c d e
    "11101111010", "11001000010", "11110001010", "10100110000", "10100001100",
    "10010110000", "10010000110", "10000101100", "10000100110", "10110010000",
    // 70-79: f g h i j k l m n o
    "10110000100", "10011010000", "10011000010", "10000110100", "10000110010",
    "11000010010", "11001010000", "11110111010", "11000010100", "10001111010",
    // 80-89: p q r s t u v w x y
    "10100111100", "10010111100", "10010011110", "10111100100", "10011110100",
    "10011110010", "11110100100", "11110010100", "11110010010", "11011011110",
    // 90-94: z { | } ~
    "11011110110", "11110110110", "10101111000", "10100011110", "10001011110",
    // 95-102: DEL FNC3 FNC2 SHIFT CODE-C FNC4 CODE-A FNC1
    "10111101000", "10111100010", "11110101000", "11110100010", "10111011110",
    "10111101110", "11101011110", "11110101110",
    // 103-105: START-A START-B START-C
    "11010000100", "11010010000", "11010011100",
];

/// Subset B value of a character, `None` outside space..=tilde.
pub fn value_of(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' => Some(ch as u8 - b' '),
        _ => None,
    }
}

/// Pattern for a symbol value.
///
/// Panics if `value` is greater than 105; callers only pass table values and
/// checksums reduced modulo 103.
pub fn pattern(value: u8) -> &'static str {
    PATTERNS[usize::from(value)]
}

/// Pattern for a subset B character.
pub fn lookup(ch: char) -> Option<&'static str> {
    value_of(ch).map(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_widths() {
        assert!(PATTERNS.iter().all(|p| p.len() == SYMBOL_WIDTH));
        assert_eq!(STOP.len(), 13);
    }

    #[test]
    fn test_patterns_unique() {
        let unique: HashSet<_> = PATTERNS.iter().collect();
        assert_eq!(unique.len(), PATTERNS.len());
    }

    #[test]
    fn test_three_bars_three_spaces() {
        // Every symbol is bar-space-bar-space-bar-space, 11 modules total
        for p in PATTERNS {
            let mut runs = 1;
            for w in p.as_bytes().windows(2) {
                if w[0] != w[1] {
                    runs += 1;
                }
            }
            assert_eq!(runs, 6, "pattern {} should have 6 runs", p);
            assert!(p.starts_with('1') && p.ends_with('0'));
        }
    }

    #[test]
    fn test_even_bar_modules() {
        // Self-check parity: bar modules of each symbol sum to an even count
        for (value, p) in PATTERNS.iter().enumerate() {
            let bars = p.bytes().filter(|&b| b == b'1').count();
            assert_eq!(bars % 2, 0, "value {} has odd bar width", value);
        }
    }

    #[test]
    fn test_start_b() {
        assert_eq!(pattern(START_B), "11010010000");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(value_of(' '), Some(0));
        assert_eq!(value_of('A'), Some(33));
        assert_eq!(value_of('~'), Some(94));
        assert_eq!(lookup('A'), Some("10100011000"));
        assert_eq!(lookup('\n'), None);
        assert_eq!(lookup('é'), None);
    }
}
