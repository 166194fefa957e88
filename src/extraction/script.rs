use std::ops::RangeInclusive;

/// Devanagari block (U+0900..U+097F), covers the Hindi and Marathi text
/// printed on the card alongside the Latin transliteration.
pub const DEVANAGARI: RangeInclusive<char> = '\u{0900}'..='\u{097F}';

pub fn is_devanagari(c: char) -> bool {
    DEVANAGARI.contains(&c)
}

pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// A character that can start or continue a name token in either script.
pub fn is_name_letter(c: char) -> bool {
    is_latin_letter(c) || is_devanagari(c)
}

/// Characters the name cleaner lets through in its final sweep: letters of
/// both scripts, whitespace, and the punctuation that occurs inside real
/// names (initials, apostrophes, hyphenated surnames).
pub fn is_name_char(c: char) -> bool {
    is_name_letter(c) || c.is_whitespace() || c == '.' || c == '\'' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devanagari_membership() {
        assert!(is_devanagari('न'));
        assert!(is_devanagari('ा'));
        assert!(!is_devanagari('a'));
        assert!(!is_devanagari('3'));
    }

    #[test]
    fn test_name_char_set() {
        assert!(is_name_char('K'));
        assert!(is_name_char('.'));
        assert!(is_name_char('\''));
        assert!(is_name_char('-'));
        assert!(is_name_char(' '));
        assert!(!is_name_char('7'));
        assert!(!is_name_char(':'));
    }
}
