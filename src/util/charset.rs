//! Codepoint classification for the tokenizer.
//!
//! Every predicate is total over the full Unicode range: a Rust `char` is a
//! Unicode scalar value, so characters outside the Basic Multilingual Plane
//! are classified like any other.

use logos::Logos;

#[derive(Logos)]
enum DigitClass {
    #[regex(r"\p{Nd}")]
    Decimal,
}

/// Returns `true` if the codepoint is a letter in any script.
///
/// ```
/// use glyphic::util::charset::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('λ'));
/// assert!(is_letter('𝑥'));
/// assert!(!is_letter('7'));
/// assert!(!is_letter('⍳'));
/// ```
#[must_use]
pub fn is_letter(codepoint: char) -> bool {
    codepoint.is_alphabetic()
}

/// Returns `true` if the codepoint is a decimal digit (`Nd`) in any script.
///
/// Other numeric characters such as superscripts, fractions and Roman
/// numerals are not digits.
///
/// ```
/// use glyphic::util::charset::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('٣'));
/// assert!(!is_digit('¯'));
/// assert!(!is_digit('²'));
/// assert!(!is_digit('Ⅻ'));
/// ```
#[must_use]
pub fn is_digit(codepoint: char) -> bool {
    if codepoint.is_ascii() {
        return codepoint.is_ascii_digit();
    }

    let mut buffer = [0; 4];
    let mut lexer = DigitClass::lexer(codepoint.encode_utf8(&mut buffer));
    matches!(lexer.next(), Some(Ok(DigitClass::Decimal)))
}

/// Returns the value of a decimal digit in any script, or `None` for any
/// other codepoint.
///
/// Every script encodes its digits as one contiguous run from zero to nine,
/// so the value is the distance back to the start of the run.
///
/// ```
/// use glyphic::util::charset::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('٣'), Some(3));
/// assert_eq!(digit_value('𝟡'), Some(9));
/// assert_eq!(digit_value('x'), None);
/// ```
#[must_use]
pub fn digit_value(codepoint: char) -> Option<u32> {
    if codepoint.is_ascii() {
        return codepoint.to_digit(10);
    }
    if !is_digit(codepoint) {
        return None;
    }

    let mut offset = 0;
    let mut current = u32::from(codepoint);
    loop {
        match current.checked_sub(1).and_then(char::from_u32) {
            Some(previous) if is_digit(previous) => {
                offset += 1;
                current -= 1;
            },
            _ => return Some(offset % 10),
        }
    }
}

/// Returns `true` for Unicode whitespace, including line breaks.
///
/// ```
/// use glyphic::util::charset::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{3000}'));
/// assert!(!is_whitespace('⋄'));
/// ```
#[must_use]
pub fn is_whitespace(codepoint: char) -> bool {
    codepoint.is_whitespace()
}

/// Appends the textual representation of a single codepoint to `buffer`.
///
/// Codepoints outside the 16-bit range are stored as their full multi-byte
/// UTF-8 sequence.
///
/// ```
/// use glyphic::util::charset::add_codepoint;
///
/// let mut buf = String::from("x");
/// add_codepoint(&mut buf, '⍴');
/// add_codepoint(&mut buf, '𝔸');
///
/// assert_eq!(buf, "x⍴𝔸");
/// assert_eq!(buf.chars().count(), 3);
/// ```
pub fn add_codepoint(buffer: &mut String, codepoint: char) {
    buffer.push(codepoint);
}

/// Returns the single-codepoint string for `codepoint`.
#[must_use]
pub fn codepoint_to_string(codepoint: char) -> String {
    let mut buffer = String::with_capacity(codepoint.len_utf8());
    add_codepoint(&mut buffer, codepoint);
    buffer
}
