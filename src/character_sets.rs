//! Character classes from RFC 3986 and RFC 1035.
//!
//! ASCII bytes are classified through a single lookup table shared by the
//! component and DNS validators. Non-ASCII runes are classified by their
//! Unicode General Category: letters are `L*`, digits are `Nd`.

use unicode_general_category::{GeneralCategory, get_general_category};

const LETTER: u8 = 1;
const DIGIT: u8 = 1 << 1;
/// `-` `.` `_` `~`
const UNRESERVED_MARK: u8 = 1 << 2;
/// `!` `$` `&` `'` `(` `)` `*` `+` `,` `;` `=`
const SUB_DELIM: u8 = 1 << 3;
const HEX: u8 = 1 << 4;

const COMPONENT: u8 = LETTER | DIGIT | UNRESERVED_MARK | SUB_DELIM;

const CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = LETTER;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = LETTER;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = DIGIT | HEX;
        i += 1;
    }

    let mut i = 0;
    while i < 6 {
        table[(b'a' + i) as usize] |= HEX;
        table[(b'A' + i) as usize] |= HEX;
        i += 1;
    }

    let marks = b"-._~";
    let mut i = 0;
    while i < marks.len() {
        table[marks[i] as usize] = UNRESERVED_MARK;
        i += 1;
    }

    let delims = b"!$&'()*+,;=";
    let mut i = 0;
    while i < delims.len() {
        table[delims[i] as usize] = SUB_DELIM;
        i += 1;
    }

    table
};

#[inline]
const fn class_of(b: u8) -> u8 {
    CHAR_TABLE[b as usize]
}

/// Check if a byte is an ASCII hexadecimal digit
#[inline]
pub const fn is_hex(b: u8) -> bool {
    class_of(b) & HEX != 0
}

/// Value of an ASCII hexadecimal digit (0 for anything else)
#[inline]
pub const fn unhex(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// Check if a byte may appear unescaped in a generic component
#[inline]
pub const fn is_component_byte(b: u8) -> bool {
    class_of(b) & COMPONENT != 0
}

/// General Category `L` (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`)
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return class_of(c as u8) & LETTER != 0;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// General Category `Nd`. Other numerals (`²`, `½`, `Ⅻ`) are not digits.
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return class_of(c as u8) & DIGIT != 0;
    }
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// RFC 1035 `<let-dig>`
pub fn is_let_dig(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// RFC 1035 `<let-dig-hyp>`
pub fn is_let_dig_hyp(c: char) -> bool {
    c == '-' || is_let_dig(c)
}

/// RFC 3986 `unreserved` / `sub-delims`, or one of the caller's extra runes
pub fn is_component_char(c: char, accepted_extra: &[char]) -> bool {
    let allowed = if c.is_ascii() {
        is_component_byte(c as u8)
    } else {
        is_let_dig(c)
    };
    allowed || accepted_extra.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_bytes() {
        for b in b"azAZ09-._~!$&'()*+,;=" {
            assert!(is_component_byte(*b), "{}", *b as char);
        }
        for b in b" \t\"#%/:<>?@[\\]^`{|}\x00\x7f" {
            assert!(!is_component_byte(*b), "{:?}", *b as char);
        }
        assert!(!is_component_byte(0xC3));
    }

    #[test]
    fn test_hex() {
        assert!(is_hex(b'0') && is_hex(b'9') && is_hex(b'a') && is_hex(b'F'));
        assert!(!is_hex(b'g') && !is_hex(b'G') && !is_hex(b'%'));
        assert_eq!(unhex(b'7'), 7);
        assert_eq!(unhex(b'c'), 12);
        assert_eq!(unhex(b'E'), 14);
    }

    #[test]
    fn test_letters_and_digits() {
        assert!(is_letter('q') && is_letter('Q') && is_letter('é') && is_letter('ж'));
        assert!(!is_letter('1') && !is_letter('-') && !is_letter('_'));
        assert!(is_digit('0') && is_digit('٣') && is_digit('७'));
        assert!(!is_digit('x'));
        assert!(is_let_dig_hyp('-') && !is_let_dig('-'));
    }

    #[test]
    fn test_other_numerals_are_neither_letters_nor_digits() {
        // No, Nl and combining marks
        for c in ['\u{b2}', '\u{bd}', '\u{2163}', '\u{216b}', '\u{2460}', '\u{345}'] {
            assert!(!is_digit(c), "{c:?}");
            assert!(!is_letter(c), "{c:?}");
            assert!(!is_let_dig_hyp(c), "{c:?}");
            assert!(!is_component_char(c, &[]), "{c:?}");
        }
        // Modifier and title case letters are letters
        assert!(is_letter('\u{2b0}') && is_letter('\u{1c5}'));
    }

    #[test]
    fn test_component_char_with_extra() {
        assert!(is_component_char('~', &[]));
        assert!(is_component_char('日', &[]));
        assert!(!is_component_char(':', &[]));
        assert!(is_component_char(':', &[':', '@']));
        assert!(!is_component_char('/', &[':', '@']));
    }
}
